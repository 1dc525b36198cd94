//! # Shop Shell
//!
//! Line-oriented interactive session. Each line is parsed into a
//! [`ShellCommand`], applied to the [`Storefront`], and the affected view
//! is printed again.

use std::str::FromStr;

use storefront_core::catalog::SortMode;
use storefront_core::state::Storefront;
use storefront_core::ProductId;

use crate::render;

pub const HELP: &str = "\
Commands:
  search [text]        filter titles (empty clears)
  category <name|all>  filter by category
  categories           list categories
  sort <mode>          default | priceAsc | priceDesc | titleAsc
  page <n>             jump to page n
  next / prev          move one page
  list                 show the current page
  show <id>            product details
  close                close product details
  add <id>             add one to the cart
  remove <id>          remove a product from the cart
  cart                 show the cart
  checkout             place a (mock) order
  help                 this text
  quit                 leave the shop
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Category(String),
    Categories,
    Sort(SortMode),
    Page(usize),
    Next,
    Prev,
    List,
    Show(ProductId),
    Close,
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Checkout,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "category" | "c" => {
                if rest.is_empty() {
                    Err("Usage: category <name|all>".to_string())
                } else {
                    Ok(Self::Category(rest.to_string()))
                }
            }
            "categories" => Ok(Self::Categories),
            "sort" => rest.parse().map(Self::Sort),
            "page" | "p" => parse_number(rest, "page <n>").map(Self::Page),
            "next" | "n" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "list" | "ls" | "" => Ok(Self::List),
            "show" => parse_number(rest, "show <id>").map(Self::Show),
            "close" => Ok(Self::Close),
            "add" | "a" => parse_number(rest, "add <id>").map(Self::Add),
            "remove" | "rm" => parse_number(rest, "remove <id>").map(Self::Remove),
            "cart" => Ok(Self::Cart),
            "checkout" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{}', try 'help'", other)),
        }
    }
}

fn parse_number<T: FromStr>(raw: &str, usage: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("Usage: {}", usage))
}

/// Result of one shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Apply a command to the session and produce the text to show
pub fn execute(store: &mut Storefront, command: ShellCommand) -> Outcome {
    let text = match command {
        ShellCommand::Search(text) => {
            store.set_search(text);
            page(store)
        }
        ShellCommand::Category(category) => {
            store.set_category(category.as_str());
            page(store)
        }
        ShellCommand::Categories => render::category_list(store.categories()),
        ShellCommand::Sort(mode) => {
            store.set_sort(mode);
            page(store)
        }
        ShellCommand::Page(n) => {
            store.set_page(n);
            page(store)
        }
        ShellCommand::Next => {
            if store.next_page() {
                page(store)
            } else {
                "Already on the last page.\n".to_string()
            }
        }
        ShellCommand::Prev => {
            if store.prev_page() {
                page(store)
            } else {
                "Already on the first page.\n".to_string()
            }
        }
        ShellCommand::List => page(store),
        ShellCommand::Show(id) => match store.select(id) {
            Some(product) => render::product_detail(product),
            None => format!("No product with id {}.\n", id),
        },
        ShellCommand::Close => {
            store.clear_selection();
            page(store)
        }
        ShellCommand::Add(id) => match store.add_to_cart(id) {
            Some(line) => format!("Added {} (x{}).\n", line.title, line.quantity),
            None => format!("No product with id {}.\n", id),
        },
        ShellCommand::Remove(id) => {
            store.remove_from_cart(id);
            render::cart(store.cart())
        }
        ShellCommand::Cart => render::cart(store.cart()),
        ShellCommand::Checkout => render::receipt(&store.checkout()),
        ShellCommand::Help => format!("{}\nSort modes:\n{}", HELP, render::sort_modes()),
        ShellCommand::Quit => return Outcome::Quit,
    };

    Outcome::Print(text)
}

fn page(store: &Storefront) -> String {
    render::catalog_page(store.view(), store.query())
}
