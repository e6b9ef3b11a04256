//! The in-progress order. One actor owns the line items; every successful
//! mutation publishes a snapshot to the assistant so it can re-recommend
//! after the quiet period.

pub mod error;

pub use error::CartError;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::actor_framework::ServiceResponse;
use crate::clients::{AssistantClient, CartClient};
use crate::domain::{MenuItem, OrderLine, Receipt};

#[derive(Debug)]
pub enum CartRequest {
    Add {
        item: MenuItem,
        respond_to: ServiceResponse<(), CartError>,
    },
    SetQuantity {
        item_id: u32,
        quantity: u32,
        respond_to: ServiceResponse<(), CartError>,
    },
    Remove {
        item_id: u32,
        respond_to: ServiceResponse<(), CartError>,
    },
    Clear {
        respond_to: ServiceResponse<(), CartError>,
    },
    Lines {
        respond_to: ServiceResponse<Vec<OrderLine>, CartError>,
    },
    Total {
        respond_to: ServiceResponse<u64, CartError>,
    },
    Checkout {
        respond_to: ServiceResponse<Receipt, CartError>,
    },
    AcknowledgeCheckout {
        respond_to: ServiceResponse<(), CartError>,
    },
}

/// Cart actor. Lines keep insertion order for display; a line's quantity is
/// never allowed below 1 (the line is removed instead).
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    lines: Vec<OrderLine>,
    assistant: AssistantClient,
}

impl CartService {
    pub fn new(buffer_size: usize, assistant: AssistantClient) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            lines: Vec::new(),
            assistant,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Add { item, respond_to } => {
                    self.handle_add(item, respond_to).await;
                }
                CartRequest::SetQuantity { item_id, quantity, respond_to } => {
                    self.handle_set_quantity(item_id, quantity, respond_to).await;
                }
                CartRequest::Remove { item_id, respond_to } => {
                    self.handle_remove(item_id, respond_to).await;
                }
                CartRequest::Clear { respond_to } => {
                    self.lines.clear();
                    info!("Cart cleared");
                    let _ = respond_to.send(Ok(()));
                    self.publish_cart().await;
                }
                CartRequest::Lines { respond_to } => {
                    let _ = respond_to.send(Ok(self.lines.clone()));
                }
                CartRequest::Total { respond_to } => {
                    let _ = respond_to.send(Ok(self.total()));
                }
                CartRequest::Checkout { respond_to } => {
                    self.handle_checkout(respond_to);
                }
                CartRequest::AcknowledgeCheckout { respond_to } => {
                    self.lines.clear();
                    info!("Checkout acknowledged, cart cleared");
                    let _ = respond_to.send(Ok(()));
                    self.publish_cart().await;
                }
            }
        }

        info!("CartService stopped");
    }

    fn total(&self) -> u64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Adding an item already in the cart bumps its quantity instead of
    /// creating a second line.
    #[instrument(fields(item_id = %item.id, item_name = %item.name), skip(self, item, respond_to))]
    async fn handle_add(&mut self, item: MenuItem, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing add request");

        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => {
                line.quantity += 1;
                info!(quantity = line.quantity, "Quantity incremented");
            }
            None => {
                self.lines.push(OrderLine::new(item));
                info!("Line added");
            }
        }

        let _ = respond_to.send(Ok(()));
        self.publish_cart().await;
    }

    /// A quantity of 0 is a removal; the cart never stores a line below 1.
    #[instrument(fields(item_id = %item_id, quantity = %quantity), skip(self, respond_to))]
    async fn handle_set_quantity(
        &mut self,
        item_id: u32,
        quantity: u32,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        debug!("Processing set_quantity request");

        if quantity < 1 {
            self.lines.retain(|line| line.item.id != item_id);
            info!("Line removed via zero quantity");
        } else if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
            info!("Quantity updated");
        } else {
            debug!("No matching line");
        }

        let _ = respond_to.send(Ok(()));
        self.publish_cart().await;
    }

    #[instrument(fields(item_id = %item_id), skip(self, respond_to))]
    async fn handle_remove(&mut self, item_id: u32, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing remove request");

        let before = self.lines.len();
        self.lines.retain(|line| line.item.id != item_id);
        if self.lines.len() < before {
            info!("Line removed");
        } else {
            debug!("No matching line");
        }

        let _ = respond_to.send(Ok(()));
        self.publish_cart().await;
    }

    /// Checkout hands back a receipt for the confirmation screen. The cart
    /// is only cleared on acknowledgment, matching the modal flow.
    #[instrument(skip(self, respond_to))]
    fn handle_checkout(&mut self, respond_to: ServiceResponse<Receipt, CartError>) {
        debug!("Processing checkout request");

        if self.lines.is_empty() {
            debug!("Checkout on empty cart rejected");
            let _ = respond_to.send(Err(CartError::EmptyCart));
            return;
        }

        let receipt = Receipt {
            lines: self.lines.clone(),
            total: self.total(),
        };
        info!(total = receipt.total, "Checkout confirmed");
        let _ = respond_to.send(Ok(receipt));
    }

    async fn publish_cart(&self) {
        if let Err(e) = self.assistant.notify_cart_changed(self.lines.clone()).await {
            debug!(error = %e, "Assistant notification dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::AssistantRequest;
    use crate::data::seed_menu;

    fn item(id: u32) -> MenuItem {
        seed_menu().into_iter().find(|i| i.id == id).unwrap()
    }

    fn start_cart() -> (CartClient, mpsc::Receiver<AssistantRequest>) {
        let (assistant_tx, assistant_rx) = mpsc::channel(32);
        let (service, client) = CartService::new(32, AssistantClient::new(assistant_tx));
        tokio::spawn(service.run());
        (client, assistant_rx)
    }

    #[tokio::test]
    async fn repeated_adds_coalesce_into_one_line() {
        let (cart, _rx) = start_cart();

        for _ in 0..3 {
            cart.add(item(5)).await.unwrap();
        }

        let lines = cart.lines().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 5);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(cart.total().await.unwrap(), 3 * 30_000);
    }

    #[tokio::test]
    async fn zero_quantity_removes_the_line() {
        let (cart, _rx) = start_cart();

        cart.add(item(5)).await.unwrap();
        cart.add(item(2)).await.unwrap();
        cart.set_quantity(5, 0).await.unwrap();

        let lines = cart.lines().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 2);
    }

    #[tokio::test]
    async fn remove_of_absent_line_is_a_no_op() {
        let (cart, _rx) = start_cart();

        cart.add(item(1)).await.unwrap();
        cart.remove(99).await.unwrap();

        assert_eq!(cart.lines().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn checkout_requires_a_non_empty_cart() {
        let (cart, _rx) = start_cart();

        assert_eq!(cart.checkout().await, Err(CartError::EmptyCart));

        cart.add(item(3)).await.unwrap();
        cart.add(item(3)).await.unwrap();
        let receipt = cart.checkout().await.unwrap();
        assert_eq!(receipt.total, 2 * 45_000);

        // Cart survives until the confirmation is closed.
        assert_eq!(cart.lines().await.unwrap().len(), 1);
        cart.acknowledge_checkout().await.unwrap();
        assert!(cart.lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mutations_notify_the_assistant() {
        let (cart, mut rx) = start_cart();

        cart.add(item(5)).await.unwrap();

        match rx.recv().await {
            Some(AssistantRequest::CartChanged { lines }) => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].item.id, 5);
            }
            other => panic!("Unexpected assistant message: {:?}", other),
        }
    }
}
