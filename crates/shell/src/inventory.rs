//! Inventory menu loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::info;

use autoshop_core::{DomainError, PartId};
use autoshop_inventory::{Category, InventoryLedger, UnitPrice};

use crate::config::ShellConfig;
use crate::console::Console;

const TITLE: &str = "Auto Parts Inventory";
const HELP: &str = "Commands: add, sell, order, list, help, quit";

/// Outcome of prompting for one field.
enum Field<T> {
    Value(T),
    Invalid,
    Closed,
}

/// Interactive shell over an [`InventoryLedger`].
pub struct InventorySession<R, W> {
    ledger: InventoryLedger,
    console: Console<R, W>,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> InventorySession<R, W> {
    pub fn new(ledger: InventoryLedger, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            ledger,
            console: Console::new(input, output),
            config,
        }
    }

    /// Session over a fresh ledger, preloaded per `config.preload_samples`.
    pub fn start(input: R, output: W, config: ShellConfig) -> anyhow::Result<Self> {
        let ledger = if config.preload_samples {
            InventoryLedger::with_sample_catalogue()?
        } else {
            InventoryLedger::new()
        };
        Ok(Self::new(ledger, input, output, config))
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(parts = self.ledger.len(), "inventory session started");
        self.console.say(TITLE)?;
        self.console.say(HELP)?;
        self.refresh_list()?;

        let prompt = self.config.prompt.clone();
        while let Some(line) = self.console.ask(&prompt)? {
            let keep_going = match line.to_ascii_lowercase().as_str() {
                "" => true,
                "add" => self.add_part()?,
                "sell" => self.sell_part()?,
                "order" => self.order_stock()?,
                "list" => {
                    self.refresh_list()?;
                    true
                }
                "help" => {
                    self.console.say(HELP)?;
                    true
                }
                "quit" | "exit" => false,
                other => {
                    self.console.say(format!("Unknown command: {other}"))?;
                    self.console.say(HELP)?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        info!(parts = self.ledger.len(), "inventory session ended");
        Ok(())
    }

    fn add_part(&mut self) -> anyhow::Result<bool> {
        let category = match self.ask_field::<Category>("Type (Engine/Body): ")? {
            Field::Value(c) => c,
            Field::Invalid => return self.reject("Unknown part type."),
            Field::Closed => return Ok(false),
        };
        let Some(name) = self.console.ask("Name: ")? else {
            return Ok(false);
        };
        let price = match self.ask_field::<f64>("Price: ")? {
            Field::Value(p) => p,
            Field::Invalid => return self.reject("Invalid number."),
            Field::Closed => return Ok(false),
        };
        let quantity = match self.ask_field::<u32>("Qty: ")? {
            Field::Value(q) => q,
            Field::Invalid => return self.reject("Invalid number."),
            Field::Closed => return Ok(false),
        };

        let unit_price = match UnitPrice::new(price) {
            Ok(p) => p,
            Err(_) => return self.reject("Invalid price."),
        };
        let id = self.ledger.add_part(name, category, unit_price, quantity)?;
        self.console.say(format!("Added part #{id}"))?;
        self.refresh_list()?;
        Ok(true)
    }

    fn sell_part(&mut self) -> anyhow::Result<bool> {
        let (id, qty) = match self.ask_id_and_qty("Enter quantity to sell: ")? {
            Field::Value(answer) => answer,
            Field::Invalid => return self.reject("Invalid number."),
            Field::Closed => return Ok(false),
        };

        match self.ledger.sell_stock(id, qty) {
            Ok(part) => {
                let message = format!("Sold {qty} of {}", part.name());
                self.console.say(message)?;
                self.refresh_list()?;
            }
            Err(DomainError::InsufficientStock { .. }) => {
                self.console.say("Not enough stock.")?;
                self.refresh_list()?;
            }
            Err(err) => self.say_failure(&err)?,
        }
        Ok(true)
    }

    fn order_stock(&mut self) -> anyhow::Result<bool> {
        let (id, qty) = match self.ask_id_and_qty("Enter quantity to add: ")? {
            Field::Value(answer) => answer,
            Field::Invalid => return self.reject("Invalid number."),
            Field::Closed => return Ok(false),
        };

        match self.ledger.add_stock(id, qty) {
            Ok(_) => {
                self.console.say("Stock updated.")?;
                self.refresh_list()?;
            }
            Err(err) => self.say_failure(&err)?,
        }
        Ok(true)
    }

    /// Part number, then quantity.
    fn ask_id_and_qty(&mut self, qty_prompt: &str) -> anyhow::Result<Field<(PartId, u32)>> {
        let id = match self.ask_field::<PartId>("Enter Part Number: ")? {
            Field::Value(id) => id,
            Field::Invalid => return Ok(Field::Invalid),
            Field::Closed => return Ok(Field::Closed),
        };
        Ok(match self.ask_field::<u32>(qty_prompt)? {
            Field::Value(qty) => Field::Value((id, qty)),
            Field::Invalid => Field::Invalid,
            Field::Closed => Field::Closed,
        })
    }

    fn ask_field<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<Field<T>> {
        Ok(match self.console.ask(prompt)? {
            None => Field::Closed,
            Some(text) => match text.parse::<T>() {
                Ok(value) => Field::Value(value),
                Err(_) => Field::Invalid,
            },
        })
    }

    fn reject(&mut self, message: &str) -> anyhow::Result<bool> {
        self.console.say(message)?;
        Ok(true)
    }

    fn say_failure(&mut self, err: &DomainError) -> anyhow::Result<()> {
        let message = match err {
            DomainError::NotFound(_) => "Part not found.".to_string(),
            DomainError::InsufficientStock { .. } => "Not enough stock.".to_string(),
            other => other.to_string(),
        };
        self.console.say(message)
    }

    fn refresh_list(&mut self) -> anyhow::Result<()> {
        if self.ledger.is_empty() {
            return self.console.say("(no parts)");
        }
        let lines: Vec<String> = self.ledger.list_all().iter().map(ToString::to_string).collect();
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }
}
