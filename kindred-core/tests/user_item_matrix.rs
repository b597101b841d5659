//! Behaviour tests verifying matrix construction from raw ratings.

use kindred_core::{Rating, UserItemMatrix};
use rstest::rstest;

fn ratings(triples: &[(u32, u32, u8)]) -> Vec<Rating> {
    triples
        .iter()
        .map(|&(user, item, value)| Rating::new(user, item, value, 0).expect("valid rating"))
        .collect()
}

#[rstest]
#[case(&[(1, 7, 3)], 1, 7, Some(3.0))]
#[case(&[(1, 7, 3)], 1, 8, None)]
#[case(&[(1, 7, 3)], 2, 7, None)]
#[case(&[(1, 7, 2), (1, 7, 4)], 1, 7, Some(3.0))]
#[case(&[(1, 7, 1), (1, 7, 2), (1, 7, 2)], 1, 7, Some(5.0 / 3.0))]
fn cell_lookup(
    #[case] triples: &[(u32, u32, u8)],
    #[case] user: u32,
    #[case] item: u32,
    #[case] expected: Option<f32>,
) {
    let matrix = UserItemMatrix::from_ratings(&ratings(triples));
    assert_eq!(matrix.rating(user, item), expected);
}

#[rstest]
fn rows_cover_exactly_the_rating_users() {
    let matrix = UserItemMatrix::from_ratings(&ratings(&[(3, 1, 2), (1, 1, 4), (3, 2, 5)]));

    assert_eq!(matrix.user_count(), 2);
    assert!(matrix.contains_user(1));
    assert!(matrix.contains_user(3));
    assert!(!matrix.contains_user(2));
}

#[rstest]
fn row_iteration_is_ascending_by_user_id() {
    let matrix = UserItemMatrix::from_ratings(&ratings(&[(9, 1, 2), (4, 1, 4), (7, 1, 5)]));
    let users: Vec<u32> = matrix.users().collect();
    assert_eq!(users, vec![4, 7, 9]);
}
