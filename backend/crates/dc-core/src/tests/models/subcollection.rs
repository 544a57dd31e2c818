use crate::models::subcollection::{insert_head, remove_by_id};
use crate::Entry;

use googletest::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Item(Uuid);

impl Entry for Item {
    fn id(&self) -> Uuid {
        self.0
    }
}

#[test]
fn given_empty_list_when_remove_then_returns_false() {
    let mut items: Vec<Item> = Vec::new();

    assert_that!(remove_by_id(&mut items, Uuid::new_v4()), eq(false));
    assert_that!(items, is_empty());
}

#[test]
fn given_three_items_when_middle_removed_then_order_of_rest_kept() {
    let mut items = Vec::new();
    let a = insert_head(&mut items, Item(Uuid::new_v4()));
    let b = insert_head(&mut items, Item(Uuid::new_v4()));
    let c = insert_head(&mut items, Item(Uuid::new_v4()));

    assert_that!(remove_by_id(&mut items, b), eq(true));
    assert_that!(items, elements_are![eq(&Item(c)), eq(&Item(a))]);
}
