use querylog_core::{Dialect, Value, render, scan};
use rstest::rstest;

fn uuid_bytes() -> Vec<u8> {
    vec![
        0x5f, 0x83, 0x31, 0x65, 0xb0, 0xd4, 0x4d, 0x56, 0xb2, 0x1f, 0x50, 0x0d, 0x29, 0xbd, 0x94,
        0xae,
    ]
}

fn is_quoted_uuid(s: &str) -> bool {
    let Some(inner) = s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) else {
        return false;
    };
    let groups: Vec<&str> = inner.split('-').collect();
    groups.iter().map(|g| g.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)))
}

#[rstest]
#[case::postgres(Dialect::Postgres)]
#[case::tds(Dialect::Tds)]
#[case::mysql(Dialect::MySql)]
fn null_and_uuid_render_identically(#[case] dialect: Dialect) {
    assert_eq!(render(&Value::Null, dialect), "NULL");

    let rendered = render(&Value::Bytes(uuid_bytes()), dialect);
    assert!(is_quoted_uuid(&rendered), "not a uuid literal: {rendered}");
    assert_eq!(rendered, "'5f833165-b0d4-4d56-b21f-500d29bd94ae'");
}

#[rstest]
#[case::fifteen(15)]
#[case::seventeen(17)]
#[case::one(1)]
fn non_uuid_lengths_are_hex(#[case] len: usize) {
    let rendered = render(&Value::Bytes(vec![0xab; len]), Dialect::MySql);
    assert_eq!(rendered, format!("x'{}'", "ab".repeat(len)));
}

#[rstest]
#[case::postgres(Dialect::Postgres, "$")]
#[case::tds(Dialect::Tds, "@")]
fn numbered_markers_map_to_number_minus_one(#[case] dialect: Dialect, #[case] marker: &str) {
    let sql: String = (1..=9)
        .rev()
        .map(|n| format!("c{n} = {marker}{n}"))
        .collect::<Vec<_>>()
        .join(" AND ");

    let found = scan(&sql, dialect).unwrap();
    let indices: Vec<usize> = found.iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
    for occ in &found {
        assert_eq!(&sql[occ.span.clone()], format!("{marker}{}", occ.index + 1));
    }
}

#[test]
fn reused_marker_yields_two_occurrences() {
    let found = scan("a = $1 OR b = $1", Dialect::Postgres).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|o| o.index == 0));
    assert!(found[0].span.start < found[1].span.start);
}

#[test]
fn sequential_markers_ignore_trailing_digits() {
    let found = scan("?9 ?1 ?", Dialect::MySql).unwrap();
    assert_eq!(
        found.iter().map(|o| o.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert!(found.iter().all(|o| o.span.len() == 1));
}
