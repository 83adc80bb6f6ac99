//! Tokenizing lines from several threads gives the same result as a
//! sequential pass, as long as each line gets the state its predecessor
//! ended in.

use mmq_lexer::{tokenize_document, Dialect, LineTokenizer, QueryTokenizer, ScanState};
use pretty_assertions::assert_eq;
use rayon::prelude::*;

const QUERY: &str = r#"# recipients active this year
(upper(country) == "FR" or lower(lang) is 'fr')
and yeartransform(last_login) between 2023 and 2024
and not tags contains "news\
letter"
and score >= 0.5e1 and opt_in is true
"#;

fn document(copies: usize) -> String {
    QUERY.repeat(copies)
}

#[test]
fn parallel_lines_match_sequential_document() {
    let tokenizer = QueryTokenizer::for_dialect(Dialect::Massmailer);
    let text = document(64);
    let sequential = tokenize_document(&tokenizer, &text);

    let starts: Vec<ScanState> = std::iter::once(ScanState::Start)
        .chain(sequential.iter().map(|line| line.end_state))
        .collect();
    let parallel: Vec<_> = text
        .split('\n')
        .collect::<Vec<_>>()
        .par_iter()
        .enumerate()
        .map(|(i, line)| tokenizer.tokenize_line(starts[i], line))
        .collect();

    assert_eq!(parallel.len(), sequential.len());
    for (line, (tokens, end)) in sequential.iter().zip(&parallel) {
        assert_eq!(&line.tokens, tokens);
        assert_eq!(line.end_state, *end);
    }
}

#[test]
fn shared_tokenizer_across_threads() {
    let tokenizer = QueryTokenizer::for_dialect(Dialect::Mailing);
    let lines: Vec<String> = (0..256)
        .map(|i| format!("using upper(f{i}) == 'v{i}' and {i}L"))
        .collect();

    let expected: Vec<_> = lines
        .iter()
        .map(|line| tokenizer.tokenize_line(ScanState::Start, line))
        .collect();
    let actual: Vec<_> = lines
        .par_iter()
        .map(|line| tokenizer.tokenize_line(ScanState::Start, line))
        .collect();

    assert_eq!(actual, expected);
}
