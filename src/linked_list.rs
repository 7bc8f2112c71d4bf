use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};
use std::ptr;

use crate::error::Error;

/// A singly-linked list with a tracked length and a cached tail for O(1)
/// append. Indexed operations walk forward from the head, except for the
/// last index, which is served through the tail in O(1).
///
/// Each node owns the rest of the chain through its `next` box; the list
/// owns the head. `tail` is a non-owning alias into that chain and is null
/// exactly when the list is empty, so no node is ever freed twice and no
/// cycle can form.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: *mut Node<T>,
    len: usize,
}

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the end of the list. O(1).
    pub fn push_back(&mut self, value: T) {
        let mut node = Box::new(Node { data: value, next: None });
        let raw: *mut Node<T> = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: tail is non-null, so it aliases the last node of the
            // chain owned through head, and that node outlives this call.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        Some(node.data)
    }

    /// Inserts `value` before position `index`, shifting later elements
    /// back by one. Valid indices are `0..len`; the append position `len`
    /// is rejected, appending goes through [`push_back`](Self::push_back).
    ///
    /// The list is validated before any structural change, so a failed
    /// insert leaves it untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index == 0 {
            let node = Box::new(Node {
                data: value,
                next: self.head.take(),
            });
            self.head = Some(node);
        } else {
            let prev = self
                .node_mut(index - 1)
                .ok_or(Error::IndexOutOfRange { index, len })?;
            let next = prev.next.take();
            prev.next = Some(Box::new(Node { data: value, next }));
        }
        // index < len, so the new node always has a successor and the tail
        // never moves here.
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`. Valid indices are
    /// `0..len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index == 0 {
            return self.pop_front().ok_or(Error::IndexOutOfRange { index, len });
        }
        let prev = self
            .node_mut(index - 1)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let mut removed = prev
            .next
            .take()
            .ok_or(Error::IndexOutOfRange { index, len })?;
        prev.next = removed.next.take();
        let prev_ptr: *mut Node<T> = &mut *prev;
        self.len -= 1;
        if index == self.len {
            // The removed node was the tail; its predecessor is the new one.
            self.tail = prev_ptr;
        }
        Ok(removed.data)
    }

    /// Removes the first occurrence of `value` and returns it, or `None`
    /// if no element is equal to it. Later duplicates are left in place.
    pub fn remove_first(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev: *mut Node<T> = ptr::null_mut();
        let mut link = &mut self.head;
        while link.is_some() {
            let hit = match link.as_deref() {
                Some(node) => node.data == *value,
                None => false,
            };
            if hit {
                let mut removed = link.take()?;
                *link = removed.next.take();
                self.len -= 1;
                if link.is_none() {
                    // Removed the tail; prev is null when the list is now
                    // empty, which is exactly what tail must be then.
                    self.tail = prev;
                }
                return Some(removed.data);
            }
            let node = link.as_deref_mut()?;
            prev = &mut *node;
            link = &mut node.next;
        }
        None
    }

    /// Returns whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first element equal to `value`, or
    /// `None` if there is no such element.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Removes all elements. The chain is released iteratively so that a
    /// long list cannot overflow the stack on teardown.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    /// Returns a reference to the value at `index`. The last index is
    /// served through the cached tail in O(1); anything else walks from
    /// the head.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index + 1 == len {
            // SAFETY: len >= 1 here, so tail aliases the last live node.
            return Ok(unsafe { &(*self.tail).data });
        }
        self.node(index)
            .map(|node| &node.data)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the value at `index`, with the same
    /// O(1) last-index path as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index + 1 == len {
            // SAFETY: len >= 1 here, so tail aliases the last live node,
            // and &mut self guarantees no other reference into the chain.
            return Ok(unsafe { &mut (*self.tail).data });
        }
        self.node_mut(index)
            .map(|node| &mut node.data)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the first element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Returns a reference to the last element, or `None` if empty. O(1).
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            None
        } else {
            // SAFETY: tail is non-null, so it aliases the last live node.
            Some(unsafe { &(*self.tail).data })
        }
    }

    /// Moves all elements of `other` onto the end of this list, leaving
    /// `other` empty. O(1): the chains are spliced, not copied.
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        if other.head.is_none() {
            return;
        }
        let chain = other.head.take();
        let chain_tail = other.tail;
        let chain_len = other.len;
        other.tail = ptr::null_mut();
        other.len = 0;
        if self.tail.is_null() {
            self.head = chain;
        } else {
            // SAFETY: tail is non-null, so it aliases our last live node.
            unsafe { (*self.tail).next = chain };
        }
        self.tail = chain_tail;
        self.len += chain_len;
    }

    /// Calls `f` on every element in order, head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for value in self {
            f(value);
        }
    }

    /// Returns a new list holding `f(value)` for every element, in order.
    /// The receiver is left unchanged.
    pub fn map<U, F>(&self, mut f: F) -> LinkedList<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = LinkedList::new();
        for value in self {
            out.push_back(f(value));
        }
        out
    }

    /// Returns a new list holding clones of the elements for which `pred`
    /// holds, preserving order. The receiver is left unchanged.
    pub fn filter<F>(&self, mut pred: F) -> LinkedList<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut out = LinkedList::new();
        for value in self {
            if pred(value) {
                out.push_back(value.clone());
            }
        }
        out
    }

    /// Returns a borrowing iterator over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        // Rebuilt front to back so the clone's tail alias is coherent.
        let mut out = Self::new();
        for value in self {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Concatenation. Both operands are consumed and the result is the sole
/// owner of every node: the right-hand chain is spliced onto the left's
/// tail in O(1), never shared with a still-live list.
impl<T> Add for LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(mut self, mut other: LinkedList<T>) -> LinkedList<T> {
        self.append(&mut other);
        self
    }
}

/// Removes the first occurrence of `value`. Consumes the receiver and
/// returns it, so the result never shares nodes with a live operand.
impl<T: PartialEq> Sub<T> for LinkedList<T> {
    type Output = LinkedList<T>;

    fn sub(mut self, value: T) -> LinkedList<T> {
        self.remove_first(&value);
        self
    }
}

/// Panicking indexed read; the fallible form is [`LinkedList::get`].
impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Panicking indexed write; the fallible form is [`LinkedList::get_mut`].
impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList: [")?;
        let mut first = true;
        for value in self {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.data)
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
