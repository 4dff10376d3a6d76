//! Tests for the text framing of vectors and matrices: whitespace-separated elements without a
//! header, one matrix row per line.

use std::io::Cursor;

use utmatrix::{FormatOptions, TriangularMatrix, UtError, Vector};

#[test]
fn vector_display_is_space_separated() {
    let v = Vector::from_vec(vec![1, 2, 3], 4).unwrap();
    assert_eq!(v.to_string(), "1 2 3");
    assert_eq!(Vector::<i32>::new(0, 0).unwrap().to_string(), "");
}

#[test]
fn vector_write_with_custom_separator() {
    let v = Vector::from_vec(vec![1.5, -2.0], 0).unwrap();
    let opts = FormatOptions {
        separator: ", ".to_string(),
        ..FormatOptions::default()
    };
    let mut out = Vec::new();
    v.write_with(&mut out, &opts).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1.5, -2");
}

#[test]
fn vector_reads_exactly_its_size() {
    let mut v = Vector::<i32>::new(3, 2).unwrap();
    let mut tokens = "7 8\n9 10".split_whitespace();
    v.read_tokens(&mut tokens).unwrap();
    assert_eq!(v.as_slice(), &[7, 8, 9]);
    assert_eq!(v.start_index(), 2);
    assert_eq!(tokens.next(), Some("10"));
}

#[test]
fn vector_read_from_reader() {
    let mut v = Vector::<f64>::new(2, 0).unwrap();
    v.read_from(Cursor::new("0.25   4e1")).unwrap();
    assert_eq!(v.as_slice(), &[0.25, 40.0]);
}

#[test]
fn vector_read_failures_leave_storage_untouched() {
    let mut v = Vector::from_vec(vec![1, 2, 3], 0).unwrap();
    assert!(matches!(v.read_from(Cursor::new("4 5")), Err(UtError::UnexpectedEof)));
    assert!(matches!(v.read_from(Cursor::new("4 x 6")), Err(UtError::Parse(t)) if t == "x"));
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn matrix_display_writes_one_row_per_line() {
    let mut m = TriangularMatrix::<i32>::new(3).unwrap();
    m[0][2] = 5;
    m[1][1] = 2;
    assert_eq!(m.to_string(), "0 0 5\n2 0\n0\n");
}

#[test]
fn matrix_write_with_custom_terminator() {
    let m = TriangularMatrix::<i32>::new(2).unwrap();
    let opts = FormatOptions {
        separator: ",".to_string(),
        row_terminator: ";".to_string(),
    };
    let mut out = Vec::new();
    m.write_with(&mut out, &opts).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0,0;0;");
}

#[test]
fn matrix_round_trips_through_text() {
    let mut m = TriangularMatrix::<i32>::new(3).unwrap();
    let mut next = 1;
    for row in m.rows_mut() {
        for value in row.iter_mut() {
            *value = next;
            next += 1;
        }
    }
    let text = m.to_string();

    let mut back = TriangularMatrix::<i32>::new(3).unwrap();
    back.read_from(Cursor::new(text)).unwrap();
    assert_eq!(back, m);
    assert_eq!(back[2].start_index(), 2);
}

#[test]
fn matrix_read_failure_leaves_entries_untouched() {
    let mut m = TriangularMatrix::<i32>::new(2).unwrap();
    assert!(matches!(m.read_from(Cursor::new("1 2")), Err(UtError::UnexpectedEof)));
    assert_eq!(m, TriangularMatrix::new(2).unwrap());
}

#[test]
fn consecutive_vectors_read_from_one_stream() {
    let mut input = Cursor::new("1 2 3\n4 5 6\n");
    let mut a = Vector::<i32>::new(3, 0).unwrap();
    let mut b = Vector::<i32>::new(3, 0).unwrap();
    a.read_from(&mut input).unwrap();
    b.read_from(&mut input).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(b.as_slice(), &[4, 5, 6]);
}

#[test]
fn vector_then_matrix_read_from_one_stream() {
    let mut input = Cursor::new("9 9\n1 2\n3\n");
    let mut v = Vector::<i32>::new(2, 0).unwrap();
    let mut m = TriangularMatrix::<i32>::new(2).unwrap();
    v.read_from(&mut input).unwrap();
    m.read_from(&mut input).unwrap();
    assert_eq!(v.as_slice(), &[9, 9]);
    assert_eq!(m[0].as_slice(), &[1, 2]);
    assert_eq!(m[1][1], 3);
}

#[test]
fn reading_stops_after_the_last_element() {
    let mut input = Cursor::new("10 20 rest");
    let mut v = Vector::<i32>::new(2, 0).unwrap();
    v.read_from(&mut input).unwrap();
    let mut tail = String::new();
    std::io::Read::read_to_string(&mut input, &mut tail).unwrap();
    assert_eq!(tail, " rest");
}
