/// An owned, possibly absent, successor. The last node in a chain has a `None` link.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Each link owns the rest of the chain, so relinking is always a move out of one link and
// into another. A node can't end up in two chains and a chain can't loop back on itself.

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub const fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }

    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node::new(value, next))
    }
}
