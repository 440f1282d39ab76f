use super::*;

#[test]
fn groups_keep_first_insertion_order_without_duplicates() {
    let mut g = Group::new();
    g.push(ElementId(3));
    g.push(ElementId(1));
    g.push(ElementId(3));
    assert_eq!(g.ids(), &[ElementId(3), ElementId(1)]);
}

#[test]
fn concat_flattens_nested_groups() {
    let a: Group = [ElementId(0), ElementId(1)].into_iter().collect();
    let b: Group = [ElementId(1), ElementId(2)].into_iter().collect();
    let all = Group::concat([&a, &b]);
    assert_eq!(all.len(), 3);
    assert!(all.contains(ElementId(2)));
    assert!(Group::new().is_empty());
    assert_eq!(Group::from(ElementId(5)).ids(), &[ElementId(5)]);
}
