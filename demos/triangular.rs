use utmatrix::{MatVec, TriangularMatrix, Vector};

fn main() {
    let n = 4;
    // fill the upper triangle with 1, 2, 3, ...
    let mut m = TriangularMatrix::<i64>::new(n).unwrap();
    let mut next = 1;
    for row in m.rows_mut() {
        for value in row.iter_mut() {
            *value = next;
            next += 1;
        }
    }
    println!("A =\n{m}");
    println!("stored entries: {} of {}", m.stored_len(), n * n);

    let twice = (&m + &m).unwrap();
    println!("A + A =\n{twice}");

    let x = vec![1, 0, 2, 1];
    let mut y = vec![0; x.len()];
    m.matvec(&x, &mut y);
    println!("A x = {:?}", y);

    let v = Vector::from_vec(vec![0, 1, 2, 3, 4], 0).unwrap();
    let w = Vector::from_vec(vec![2, 3, 4, 5, 6], 0).unwrap();
    println!("v . w = {}", v.dot(&w).unwrap());
    println!("v * 3 = {}", &v * 3);
}
