use pagetable::{OrderList, PageTableEntry};

fn setup(pages: usize, linked: &[usize]) -> (Vec<PageTableEntry>, OrderList) {
    let mut entries = vec![PageTableEntry::new(); pages];
    let mut order = OrderList::new();
    for &i in linked {
        order.insert_at_tail(&mut entries, i);
    }
    (entries, order)
}

fn walk(order: &OrderList, entries: &[PageTableEntry]) -> Vec<usize> {
    order.iter(entries).collect()
}

#[test]
fn test_insert_into_empty_list() {
    let (entries, order) = setup(4, &[2]);
    assert_eq!(order.head(), Some(2));
    assert_eq!(order.tail(), Some(2));
    assert_eq!(order.len(), 1);
    assert_eq!(entries[2].prev(), None);
    assert_eq!(entries[2].next(), None);
}

#[test]
fn test_insert_links_old_tail() {
    let (entries, order) = setup(4, &[3, 0, 1]);
    assert_eq!(walk(&order, &entries), vec![3, 0, 1]);
    assert_eq!(entries[0].prev(), Some(3));
    assert_eq!(entries[3].next(), Some(0));
    assert_eq!(entries[1].next(), None);
    assert_eq!(order.tail(), Some(1));
}

#[test]
fn test_remove_sole_element() {
    let (mut entries, mut order) = setup(2, &[1]);
    order.remove(&mut entries, 1);
    assert!(order.is_empty());
    assert_eq!(order.head(), None);
    assert_eq!(order.tail(), None);
}

#[test]
fn test_remove_head() {
    let (mut entries, mut order) = setup(4, &[0, 1, 2]);
    order.remove(&mut entries, 0);
    assert_eq!(order.head(), Some(1));
    assert_eq!(entries[1].prev(), None);
    assert_eq!(walk(&order, &entries), vec![1, 2]);
}

#[test]
fn test_remove_tail() {
    let (mut entries, mut order) = setup(4, &[0, 1, 2]);
    order.remove(&mut entries, 2);
    assert_eq!(order.tail(), Some(1));
    assert_eq!(entries[1].next(), None);
    assert_eq!(walk(&order, &entries), vec![0, 1]);
}

#[test]
fn test_remove_interior() {
    let (mut entries, mut order) = setup(4, &[0, 1, 2]);
    order.remove(&mut entries, 1);
    assert_eq!(entries[0].next(), Some(2));
    assert_eq!(entries[2].prev(), Some(0));
    assert_eq!(entries[1].prev(), None);
    assert_eq!(entries[1].next(), None);
    assert_eq!(walk(&order, &entries), vec![0, 2]);
    assert_eq!(order.len(), 2);
}

#[test]
fn test_pop_head_and_move_to_tail() {
    let (mut entries, mut order) = setup(4, &[0, 1, 2, 3]);
    order.move_to_tail(&mut entries, 1);
    assert_eq!(walk(&order, &entries), vec![0, 2, 3, 1]);
    // already at the tail
    order.move_to_tail(&mut entries, 1);
    assert_eq!(walk(&order, &entries), vec![0, 2, 3, 1]);

    assert_eq!(order.pop_head(&mut entries), Some(0));
    assert_eq!(entries[2].prev(), None);
    assert_eq!(walk(&order, &entries), vec![2, 3, 1]);

    let (mut empty_entries, mut empty) = setup(1, &[]);
    assert_eq!(empty.pop_head(&mut empty_entries), None);
}

#[test]
fn test_insert_already_linked_is_ignored() {
    let (mut entries, mut order) = setup(4, &[0, 1]);
    order.insert_at_tail(&mut entries, 0);
    order.insert_at_tail(&mut entries, 1);
    assert_eq!(walk(&order, &entries), vec![0, 1]);
    assert_eq!(order.len(), 2);

    // sole element has no links but is still the head
    let (mut entries, mut order) = setup(2, &[1]);
    assert!(order.contains(&entries, 1));
    order.insert_at_tail(&mut entries, 1);
    assert_eq!(walk(&order, &entries), vec![1]);
    assert_eq!(entries[1].next(), None);
}

#[test]
fn test_remove_unlinked_is_ignored() {
    let (mut entries, mut order) = setup(4, &[2]);
    assert!(!order.contains(&entries, 0));
    order.remove(&mut entries, 0);
    assert_eq!(order.head(), Some(2));
    assert_eq!(order.tail(), Some(2));
    assert_eq!(order.len(), 1);
}
