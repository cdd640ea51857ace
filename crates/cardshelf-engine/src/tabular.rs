use cardshelf_types::{LoadWarning, RawRow};

/// Rows produced by [`parse_report`] plus anything odd seen on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTable {
    pub rows: Vec<RawRow>,
    pub warnings: Vec<LoadWarning>,
}

/// Split comma-separated text into rows of trimmed cells.
///
/// Quote-aware: commas and line breaks inside double quotes belong to the
/// field, and `""` inside quotes is a literal quote. LF, CR and CRLF all end
/// a row. Blank lines come back as a row holding one empty cell; dropping
/// them is up to the consumer. Never fails.
pub fn parse(text: &str) -> Vec<RawRow> {
    parse_report(text).rows
}

/// Same as [`parse`], also reporting an unterminated quote at end of input.
///
/// A leading byte-order mark is dropped before parsing.
pub fn parse_report(text: &str) -> ParsedTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows: Vec<RawRow> = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // Row in which the still-open quote started
    let mut quote_row = 0;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                    if in_quotes {
                        quote_row = rows.len() + 1;
                    }
                }
            }
            ',' if !in_quotes => {
                row.push(take_field(&mut current));
            }
            '\n' | '\r' if !in_quotes => {
                row.push(take_field(&mut current));
                rows.push(std::mem::take(&mut row));
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !row.is_empty() {
        row.push(take_field(&mut current));
        rows.push(row);
    }

    let mut warnings = Vec::new();
    if in_quotes {
        tracing::warn!(row = quote_row, "unterminated quoted field at end of input");
        warnings.push(LoadWarning::UnterminatedQuote { row: quote_row });
    }

    tracing::debug!(rows = rows.len(), "parsed tabular text");
    ParsedTable { rows, warnings }
}

fn take_field(current: &mut String) -> String {
    let field = current.trim().to_string();
    current.clear();
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        assert_eq!(parse(r#"a,"b,c",d"#), vec![row(&["a", "b,c", "d"])]);
    }

    #[test]
    fn test_doubled_quote_collapses() {
        assert_eq!(
            parse(r#""he said ""hi""""#),
            vec![row(&[r#"he said "hi""#])]
        );
    }

    #[test]
    fn test_crlf_matches_lf() {
        let lf = parse("name,price\nPikachu,2\nCharizard,60\n");
        let crlf = parse("name,price\r\nPikachu,2\r\nCharizard,60\r\n");
        assert_eq!(lf, crlf);
        assert_eq!(lf.len(), 3);
    }

    #[test]
    fn test_bare_cr_terminates_row() {
        assert_eq!(parse("a\rb"), vec![row(&["a"]), row(&["b"])]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(parse("  a ,  b  \n"), vec![row(&["a", "b"])]);
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        assert_eq!(
            parse("name,notes\nMew,\"line one\nline two\"\n"),
            vec![row(&["name", "notes"]), row(&["Mew", "line one\nline two"])]
        );
    }

    #[test]
    fn test_trailing_row_without_terminator() {
        assert_eq!(parse("a,b\nc,d"), vec![row(&["a", "b"]), row(&["c", "d"])]);
        // Trailing separator still counts as a pushed field
        assert_eq!(parse("a,"), vec![row(&["a", ""])]);
    }

    #[test]
    fn test_blank_lines_are_preserved() {
        assert_eq!(
            parse("a\n\nb\n"),
            vec![row(&["a"]), row(&[""]), row(&["b"])]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert_eq!(parse("\n"), vec![row(&[""])]);
    }

    #[test]
    fn test_unterminated_quote_degrades() {
        let report = parse_report("name,notes\nMew,\"never closed, still here");
        assert_eq!(
            report.rows,
            vec![row(&["name", "notes"]), row(&["Mew", "never closed, still here"])]
        );
        assert_eq!(
            report.warnings,
            vec![LoadWarning::UnterminatedQuote { row: 2 }]
        );
    }

    #[test]
    fn test_leading_bom_is_dropped() {
        assert_eq!(
            parse("\u{feff}set,name\nBase,Pikachu\n"),
            vec![row(&["set", "name"]), row(&["Base", "Pikachu"])]
        );
        // Only at the very start
        assert_eq!(parse("a,\u{feff}b"), vec![row(&["a", "\u{feff}b"])]);
    }

    #[test]
    fn test_unquoted_round_trip() {
        let cells = ["set", "  Base ", "Pikachu", "", " 2.50", "Jungle  "];
        let terminators = ["\n", "\r", "\r\n"];

        for terminator in terminators {
            for width in 1..=3 {
                for height in 1..=4 {
                    let lines: Vec<String> = (0..height)
                        .map(|r| {
                            (0..width)
                                .map(|c| cells[(r * width + c) % cells.len()])
                                .collect::<Vec<_>>()
                                .join(",")
                        })
                        .collect();
                    // A blank last line is indistinguishable from a terminator
                    if lines.last().is_some_and(|line| line.is_empty()) {
                        continue;
                    }
                    let text = lines.join(terminator);

                    let expected: Vec<RawRow> = lines
                        .iter()
                        .map(|line| line.split(',').map(|c| c.trim().to_string()).collect())
                        .collect();
                    assert_eq!(parse(&text), expected, "input {:?}", text);

                    // A final terminator does not add a row
                    let terminated = format!("{}{}", text, terminator);
                    assert_eq!(parse(&terminated), expected, "input {:?}", terminated);
                }
            }
        }
    }

    #[test]
    fn test_trailing_separators_round_trip() {
        for text in ["a,b,", "a,,\rb,", " x , ,\r\n,y "] {
            let expected: Vec<RawRow> = text
                .split("\r\n")
                .flat_map(|line| line.split(['\r', '\n']))
                .map(|line| line.split(',').map(|c| c.trim().to_string()).collect())
                .collect();
            assert_eq!(parse(text), expected, "input {:?}", text);
        }
    }
}
