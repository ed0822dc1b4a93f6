//! # Terminal Commands
//!
//! Parses one line typed at the prompt into a widget action.
//!
//! ```text
//! cep 01310100          type into the CEP input
//! qty qtd30 2           type into a quantity field
//! delivery Frete        pick a delivery location (Atibaia, Belo Horizonte, Frete)
//! quote                 press "calcular frete"
//! choose PAC            check a radio
//! summary               print the order message block
//! state                 print the widget as JSON
//! help | quit
//! ```

use std::str::FromStr;

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PostalCode(String),
    Quantity { field: String, value: String },
    Delivery(String),
    Quote,
    Choose(String),
    Summary,
    State,
    Help,
    Quit,
}

/// Help text printed for `help` and unknown input.
pub const HELP: &str = "\
comandos:
  cep <cep>               digita o CEP
  qty <campo> <qtd>       quantidade (qtd30, qtd110)
  delivery <local>        Atibaia | Belo Horizonte | Frete
  quote                   calcular frete
  choose <PAC|SEDEX>      escolhe a opção
  summary                 bloco de entrega do pedido
  state                   estado atual (JSON)
  quit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "cep" => Ok(Command::PostalCode(rest.to_string())),
            "qty" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(f, v)| (f, v.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: qty <field> <quantity>".to_string());
                }
                Ok(Command::Quantity {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "delivery" => Ok(Command::Delivery(rest.to_string())),
            "quote" => Ok(Command::Quote),
            "choose" => Ok(Command::Choose(rest.to_string())),
            "summary" => Ok(Command::Summary),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(String::new()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}
