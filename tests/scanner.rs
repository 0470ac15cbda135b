//! End-to-end scanner properties over realistic buffers

use rowscan::{scan, FindingKind, ScanConfig};

#[test]
fn test_sample_count_matches_data_rows() {
    let config = ScanConfig::default();
    for rows in [0usize, 1, 5, 50] {
        let mut text = String::from("id,name,score\n");
        for i in 0..rows {
            text.push_str(&format!("{},user{},{}\n", i, i, i * 10));
        }
        let result = scan(&text, &config).unwrap();
        assert_eq!(result.sample_count, rows);
        assert!(result.findings.is_empty());
    }
}

#[test]
fn test_findings_line_starts_never_decrease() {
    let text = "id,name,score\n\
                1,alice,10\n\
                2,bob\n\
                3,\"multi\nline\",30\n\
                4,carol,40,extra\n\
                5,\"a\nb\nc\",50\n";
    let result = scan(text, &ScanConfig::default()).unwrap();

    assert!(result.findings.len() >= 4);
    for pair in result.findings.windows(2) {
        assert!(pair[0].line_start <= pair[1].line_start);
    }
    for finding in &result.findings {
        assert!(finding.line_start <= finding.line_end);
        assert!(finding.line_start >= 2);
    }
}

#[test]
fn test_mixed_buffer_details() {
    // Lines: 1 header, 2 short row, 3-4 quoted span, 5 long row.
    let text = "a,b,c\n1,2\n3,\"x\ny\",4\n5,6,7,8\n";
    let result = scan(text, &ScanConfig::default()).unwrap();

    assert_eq!(result.column_count, 3);
    assert_eq!(result.sample_count, 3);

    let kinds: Vec<&FindingKind> = result.findings.iter().map(|f| &f.kind).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(
        kinds[0],
        FindingKind::FieldCountMismatch {
            fields: 2,
            columns: 3
        }
    ));
    assert_eq!(kinds[1], &FindingKind::NewlineInField);
    assert!(matches!(
        kinds[2],
        FindingKind::FieldCountMismatch {
            fields: 4,
            columns: 3
        }
    ));

    assert_eq!(result.findings[1].line_start, 3);
    assert_eq!(result.findings[1].line_end, 4);
    assert_eq!(result.findings[2].line_start, 5);
}

#[test]
fn test_tab_delimited_buffer() {
    let config = ScanConfig {
        delimiter: '\t',
        ..ScanConfig::default()
    };
    let result = scan("a\tb\tc\n1\t2\n", &config).unwrap();

    assert_eq!(result.column_count, 3);
    assert_eq!(result.findings.len(), 1);
    assert_eq!(
        result.findings[0].display_text(),
        "[Line 2] Error: Number of fields (2) don't match columns (3)"
    );
}
