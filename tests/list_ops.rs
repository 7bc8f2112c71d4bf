use linked_list::{Error, LinkedList};

#[test]
fn builds_up_and_reads_back() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "LinkedList: [1,2,3]");
    assert_eq!(list[0], 1);
    assert_eq!(list[2], 3);
}

#[test]
fn insert_then_remove_round() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

    list.insert(1, 9).unwrap();
    assert_eq!(list.to_string(), "LinkedList: [1,9,2,3]");
    assert_eq!(list.len(), 4);

    assert_eq!(list.remove_at(0), Ok(1));
    assert_eq!(list.to_string(), "LinkedList: [9,2,3]");

    let list = list - 2;
    assert_eq!(list.to_string(), "LinkedList: [9,3]");
    assert_eq!(list.len(), 2);
}

#[test]
fn subtract_removes_only_first_occurrence() {
    let list: LinkedList<i32> = [9, 2, 3, 2].into_iter().collect();
    let list = list - 2;
    assert_eq!(list.to_string(), "LinkedList: [9,3,2]");
}

#[test]
fn concatenation_preserves_order() {
    let left: LinkedList<i32> = [1, 2].into_iter().collect();
    let right: LinkedList<i32> = [3, 4].into_iter().collect();

    let joined = left + right;
    assert_eq!(joined.len(), 4);
    assert_eq!(joined.to_string(), "LinkedList: [1,2,3,4]");
}

#[test]
fn out_of_range_is_reported_consistently() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let len = list.len();

    assert_eq!(
        list.get(len),
        Err(Error::IndexOutOfRange { index: len, len })
    );
    assert_eq!(
        list.insert(len, 0),
        Err(Error::IndexOutOfRange { index: len, len })
    );
    assert_eq!(
        list.remove_at(len),
        Err(Error::IndexOutOfRange { index: len, len })
    );
    assert!(list.get_mut(len).is_err());

    // Failed calls leave the list untouched.
    assert_eq!(list.to_string(), "LinkedList: [1,2,3]");
}

#[test]
fn error_message_names_index_and_length() {
    let list: LinkedList<i32> = [1].into_iter().collect();
    let err = list.get(3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index 3 out of range for list of length 1"
    );
}

#[test]
fn transforms_compose() {
    let list: LinkedList<i32> = (1..=6).collect();

    let result = list.filter(|v| v % 2 == 0).map(|v| v * 10);
    assert_eq!(result.to_string(), "LinkedList: [20,40,60]");

    // The source list is untouched by either transform.
    assert_eq!(list.to_string(), "LinkedList: [1,2,3,4,5,6]");
}

#[test]
fn works_with_non_copy_elements() {
    let mut list = LinkedList::new();
    list.push_back("alpha".to_string());
    list.push_back("beta".to_string());
    list.push_back("gamma".to_string());

    assert_eq!(list.index_of(&"beta".to_string()), Some(1));
    list[1] = "delta".to_string();
    assert_eq!(list.to_string(), "LinkedList: [alpha,delta,gamma]");

    let upper = list.map(|s| s.to_uppercase());
    assert_eq!(upper.to_string(), "LinkedList: [ALPHA,DELTA,GAMMA]");
}
