use tokio::sync::mpsc;

use crate::cart_actor::{CartError, CartRequest};
use crate::client_method;
use crate::domain::{MenuItem, OrderLine, Receipt};

/// Client for the cart actor.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CartClient => fn add(item: MenuItem) -> () as CartRequest::Add, Error = CartError);
client_method!(CartClient => fn set_quantity(item_id: u32, quantity: u32) -> () as CartRequest::SetQuantity, Error = CartError);
client_method!(CartClient => fn remove(item_id: u32) -> () as CartRequest::Remove, Error = CartError);
client_method!(CartClient => fn clear() -> () as CartRequest::Clear, Error = CartError);
client_method!(CartClient => fn lines() -> Vec<OrderLine> as CartRequest::Lines, Error = CartError);
client_method!(CartClient => fn total() -> u64 as CartRequest::Total, Error = CartError);
client_method!(CartClient => fn checkout() -> Receipt as CartRequest::Checkout, Error = CartError);
client_method!(CartClient => fn acknowledge_checkout() -> () as CartRequest::AcknowledgeCheckout, Error = CartError);
