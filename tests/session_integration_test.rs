use std::cell::RefCell;
use std::rc::Rc;

use plant_cart::{
    Cart, CartSession, CartSnapshot, CartView, Command, LineItem, Navigator,
};

#[derive(Default)]
struct SharedView {
    rendered: Rc<RefCell<Vec<CartSnapshot>>>,
    notices: Rc<RefCell<Vec<String>>>,
}

impl CartView for SharedView {
    fn render(&self, snapshot: &CartSnapshot) {
        self.rendered.borrow_mut().push(snapshot.clone());
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn show_error(&self, _message: &str) {}
}

#[derive(Default)]
struct SharedNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl Navigator for SharedNavigator {
    fn go_to_listing(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}

#[test]
fn full_shopping_session() {
    let view = SharedView::default();
    let rendered = Rc::clone(&view.rendered);
    let notices = Rc::clone(&view.notices);

    let navigator = SharedNavigator::default();
    let visited = Rc::clone(&navigator.visited);

    let cart = Cart::from_items([
        LineItem::new("Fern", "img/fern.jpg", 5.0, 2),
        LineItem::new("Aloe", "img/aloe.jpg", 10.0, 1),
    ]);
    let mut session = CartSession::new(cart, view, navigator, "/plants".to_string());

    session.handle(Command::Increment("Fern".into())).unwrap();
    session.handle(Command::Decrement("Aloe".into())).unwrap();
    session.handle(Command::Remove("Fern".into())).unwrap();
    session.handle(Command::Checkout).unwrap();
    session.handle(Command::ContinueShopping).unwrap();

    let rendered = rendered.borrow();
    assert_eq!(rendered.len(), 3);
    // After increment: Fern x3 + Aloe x1.
    assert_eq!(rendered[0].total_amount, 25.00);
    // Decrement at quantity 1 removed Aloe.
    assert_eq!(rendered[1].lines.len(), 1);
    assert_eq!(rendered[1].lines[0].name, "Fern");
    // Removing the last line leaves an explicitly empty snapshot.
    assert!(rendered[2].is_empty());
    assert_eq!(rendered[2].total_amount, 0.0);

    assert_eq!(notices.borrow().as_slice(), ["Checkout is not yet available"]);
    assert_eq!(visited.borrow().as_slice(), ["/plants"]);
}

#[test]
fn commands_against_missing_names_emit_nothing() {
    let view = SharedView::default();
    let rendered = Rc::clone(&view.rendered);

    let mut session = CartSession::new(
        Cart::new(),
        view,
        SharedNavigator::default(),
        "/plants".to_string(),
    );

    session.handle(Command::Increment("Ghost".into())).unwrap();
    session.handle(Command::Decrement("Ghost".into())).unwrap();
    session.handle(Command::Remove("Ghost".into())).unwrap();

    assert!(rendered.borrow().is_empty());
    assert!(session.cart().is_empty());
}
