//! Cross-check LIKE results against SQLite's own implementation.
//!
//! Inputs are limited to lower-case text so SQLite's ASCII case folding
//! never comes into play, and no pattern ends in a bare escape character.

use rusqlite::{params, Connection};
use sql_like::{LikePattern, LikePredicate, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sqlite_like(conn: &Connection, value: &str, pattern: &str, escape: Option<char>) -> bool {
    match escape {
        Some(c) => conn
            .query_row(
                "SELECT ?1 LIKE ?2 ESCAPE ?3",
                params![value, pattern, c.to_string()],
                |row| row.get(0),
            )
            .unwrap(),
        None => conn
            .query_row("SELECT ?1 LIKE ?2", params![value, pattern], |row| row.get(0))
            .unwrap(),
    }
}

const VALUES: &[&str] = &[
    "",
    "a",
    "ab",
    "abc",
    "aab",
    "xxabz",
    "xxab",
    "100%",
    "100",
    "1000",
    "a_b",
    "axb",
    "a.b",
    "a\\b",
    "a%b",
    "café",
    "日本語",
    "line\nbreak",
];

#[test]
fn test_unescaped_patterns_agree_with_sqlite() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    let patterns = [
        "", "%", "_", "a", "a%", "%a", "%b%", "a_b", "a%b", "%ab_", "_%_", "a.b", "a\\b", "caf_",
        "日%", "%\n%", "__", "%%", "1%0",
    ];

    for pattern in patterns {
        let compiled = LikePattern::new(pattern);
        for value in VALUES {
            assert_eq!(
                compiled.matches_str(value),
                sqlite_like(&conn, value, pattern, None),
                "pattern {:?} value {:?}",
                pattern,
                value
            );
        }
    }
}

#[test]
fn test_escaped_patterns_agree_with_sqlite() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    let cases = [
        ("100\\%", '\\'),
        ("100\\%%", '\\'),
        ("a\\_b", '\\'),
        ("a\\\\b", '\\'),
        ("a!%b", '!'),
        ("%!_%", '!'),
        ("a$$b", '$'),
        ("$a%", '$'),
        ("a%%b", '%'),
    ];

    for (pattern, escape) in cases {
        let compiled = LikePattern::with_escape(pattern, &escape.to_string()).unwrap();
        for value in VALUES {
            assert_eq!(
                compiled.matches_str(value),
                sqlite_like(&conn, value, pattern, Some(escape)),
                "pattern {:?} escape {:?} value {:?}",
                pattern,
                escape,
                value
            );
        }
    }
}

#[test]
fn test_generated_patterns_agree_with_sqlite() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    let alphabet = ['a', 'b', '%', '_'];
    let letters = ['a', 'b'];

    // small linear congruential generator keeps the run reproducible
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move |bound: usize| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % bound
    };

    for _ in 0..300 {
        let pattern: String = (0..next(6)).map(|_| alphabet[next(alphabet.len())]).collect();
        let value: String = (0..next(7)).map(|_| letters[next(letters.len())]).collect();
        assert_eq!(
            LikePattern::new(&pattern).matches_str(&value),
            sqlite_like(&conn, &value, &pattern, None),
            "pattern {:?} value {:?}",
            pattern,
            value
        );
    }
}

#[test]
fn test_predicate_filters_like_sqlite_where_clause() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE items (name TEXT);
         INSERT INTO items VALUES ('50% off'), ('500 off'), ('5% rate'), (NULL), ('half');",
    )
    .unwrap();

    let sql = "name LIKE '%!%%' ESCAPE '!'";
    let mut stmt = conn
        .prepare(&format!("SELECT name FROM items WHERE {} ORDER BY rowid", sql))
        .unwrap();
    let expected: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let predicate = LikePredicate::parse(sql).unwrap();
    let rows = ["50% off", "500 off", "5% rate", "", "half"]
        .iter()
        .map(|name| {
            let value = if name.is_empty() { Value::Null } else { Value::from(*name) };
            std::iter::once(("name".to_string(), value)).collect()
        })
        .collect();
    let kept: Vec<String> = predicate
        .filter(rows)
        .into_iter()
        .map(|row| row["name"].to_string())
        .collect();

    assert_eq!(kept, expected);
    assert_eq!(kept, vec!["50% off".to_string(), "5% rate".to_string()]);
}

#[test]
fn test_reals_render_like_sqlite() {
    init_logging();
    let conn = Connection::open_in_memory().unwrap();
    let reals = [1.0, 2.5, -3.25, 0.1, 0.0001, 0.00001, 123456.789, 1e14, 1e15, 1e20, -2.5e-7];

    for real in reals {
        let text: String = conn
            .query_row("SELECT CAST(?1 AS TEXT)", params![real], |row| row.get(0))
            .unwrap();
        let value = Value::Real(real);
        let bytes = value.like_bytes().unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), text, "real {:?}", real);

        let matched: bool = conn
            .query_row("SELECT ?1 LIKE ?2", params![real, text], |row| row.get(0))
            .unwrap();
        assert_eq!(value.like(&LikePattern::new(&text)), Some(matched), "real {:?}", real);
    }

    let matched: bool = conn
        .query_row("SELECT 1.0 LIKE '1.0'", [], |row| row.get(0))
        .unwrap();
    assert!(matched);
    assert_eq!(Value::Real(1.0).like(&LikePattern::new("1.0")), Some(true));
}

#[test]
fn test_invalid_utf8_never_fails() {
    init_logging();
    let pattern = LikePattern::new("%_%");
    for bytes in [&b"\xff"[..], b"\xc0\xaf", b"ok\xed\xa0\x80", b"\xf4\x90\x80\x80"] {
        assert!(pattern.matches(bytes));
    }
}
