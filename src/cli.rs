//! Interactive text menu over a [`StoreClient`].
//!
//! Generic over its input and output so it can be driven by stdin/stdout or
//! by in-memory buffers.

use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

use crate::clients::StoreClient;
use crate::domain::{OrderLine, ProductView};
use crate::error::StoreError;

/// Failures that end the menu loop. Bad user input never does.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),
}

pub struct Menu<R, W> {
    client: StoreClient,
    input: R,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: StoreClient, input: R, output: W) -> Self {
        Self { client, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or input ends.
    #[instrument(name = "menu", skip(self))]
    pub async fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.say("\nWelcome to Best Buy Store!").await?;
            self.say("1. List all products in store").await?;
            self.say("2. Show total amount in store").await?;
            self.say("3. Make an order").await?;
            self.say("4. Quit").await?;

            let Some(choice) = self.prompt("Please choose an option (1-4): ").await? else {
                debug!("Input closed");
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    let products = self.client.list_products().await?;
                    self.say("\nAvailable Products:").await?;
                    self.show_products(&products).await?;
                }
                "2" => {
                    let total = self.client.total_quantity().await?;
                    self.say(&format!("\nTotal items in store: {}", total)).await?;
                }
                "3" => self.make_order().await?,
                "4" => {
                    self.say("Goodbye!").await?;
                    return Ok(());
                }
                _ => self.say("Invalid choice, please try again.").await?,
            }
        }
    }

    async fn make_order(&mut self) -> Result<(), CliError> {
        // Selections index into this snapshot
        let products = self.client.list_products().await?;
        if products.is_empty() {
            self.say("No active products available for order.").await?;
            return Ok(());
        }

        self.say("\nChoose products to order (enter 0 to finish):").await?;
        self.show_products(&products).await?;

        let mut lines = Vec::new();
        loop {
            let Some(raw) = self.prompt("\nEnter product number (0 to finish): ").await? else {
                break;
            };
            let selection: i64 = match raw.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    self.say("Invalid input. Please enter numbers only.").await?;
                    continue;
                }
            };
            if selection == 0 {
                break;
            }
            let Some(product) = usize::try_from(selection)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| products.get(index))
            else {
                self.say("Invalid product number, try again.").await?;
                continue;
            };

            let Some(raw) = self.prompt(&format!("Enter quantity for {}: ", product.name)).await? else {
                break;
            };
            match raw.trim().parse::<u32>() {
                Ok(quantity) => lines.push(OrderLine::new(product.id, quantity)),
                Err(_) => self.say("Invalid input. Please enter numbers only.").await?,
            }
        }

        if lines.is_empty() {
            return Ok(());
        }

        match self.client.order(lines).await {
            Ok(total) => {
                self.say(&format!("\nOrder successful! Total cost: {} dollars.", total)).await?;
            }
            Err(e @ StoreError::ActorCommunicationError(_)) => return Err(e.into()),
            Err(e) => self.say(&format!("Order failed: {}", e)).await?,
        }
        Ok(())
    }

    async fn show_products(&mut self, products: &[ProductView]) -> io::Result<()> {
        for (index, product) in products.iter().enumerate() {
            self.say(&format!("{}. {}", index + 1, product)).await?;
        }
        Ok(())
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// Prints `text` and reads one line. `None` means input is exhausted.
    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
