use super::*;
use crate::core::Vec3;

fn line(count: usize) -> Vec<Vec3> {
    (0..count).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect()
}

#[test]
fn test_no_edges_gives_empty_lists() {
    let vertices = line(4);
    let mesh = MeshView::new(&vertices, &[]).unwrap();
    let adjacency = Adjacency::build(&mesh);
    assert_eq!(adjacency.len(), 4);
    assert!((0..4).all(|v| adjacency.neighbors(v).is_empty()));
}

#[test]
fn test_lists_are_sorted_and_unique() {
    let vertices = line(5);
    let mesh = MeshView::new(&vertices, &[[2, 4], [2, 0], [0, 2], [2, 1], [4, 2]]).unwrap();
    let adjacency = Adjacency::build(&mesh);
    assert_eq!(adjacency.neighbors(2), &[0, 1, 4]);
    assert_eq!(adjacency.neighbors(0), &[2]);
    assert_eq!(adjacency.neighbors(3), &[] as &[u32]);
}

#[test]
fn test_adjacency_is_symmetric() {
    let vertices = line(6);
    let mesh = MeshView::new(&vertices, &[[0, 1], [1, 2], [3, 5], [5, 0]]).unwrap();
    let adjacency = Adjacency::build(&mesh);
    for v in 0..adjacency.len() {
        for &n in adjacency.neighbors(v) {
            assert!(adjacency.neighbors(n as usize).contains(&(v as u32)));
        }
    }
}

#[test]
fn test_self_loops_are_ignored() {
    let vertices = line(2);
    let mesh = MeshView::new(&vertices, &[[1, 1], [0, 1]]).unwrap();
    let adjacency = Adjacency::build(&mesh);
    assert_eq!(adjacency.neighbors(1), &[0]);
}
