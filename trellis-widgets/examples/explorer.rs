//! Catalog explorer example.
//!
//! Builds a catalog tree in the arena model, expands a few nodes, reveals a
//! deeply nested table, and prints the flattened visible list the way an
//! explorer pane would render it. Run with `cargo run --example explorer`.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis_widgets::prelude::*;

#[derive(Clone, Debug)]
struct CatalogNode {
    id: String,
    name: String,
}

impl CatalogNode {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl TreeItem for CatalogNode {
    fn id(&self) -> String {
        self.id.clone()
    }
}

fn create_catalog() -> TreeModel<CatalogNode> {
    let mut tree = TreeModel::new();
    tree.insert(None, CatalogNode::new("prod", "production"));
    tree.insert(Some("prod"), CatalogNode::new("prod.sales", "sales"));
    tree.insert(Some("prod.sales"), CatalogNode::new("prod.sales.orders", "orders"));
    tree.insert(Some("prod.sales"), CatalogNode::new("prod.sales.customers", "customers"));
    tree.insert(Some("prod"), CatalogNode::new("prod.ops", "ops"));
    tree.insert(Some("prod.ops"), CatalogNode::new("prod.ops.incidents", "incidents"));
    tree.insert(None, CatalogNode::new("dev", "development"));
    tree.insert(Some("dev"), CatalogNode::new("dev.scratch", "scratch"));
    tree
}

fn print_tree(tree: &TreeModel<CatalogNode>) {
    for node in tree.flatten() {
        let indent = "  ".repeat(node.depth as usize);
        let icon = if !node.has_children {
            "  "
        } else if node.is_expanded {
            "▼ "
        } else {
            "▶ "
        };
        println!("{}{}{}", indent, icon, node.item.name);
    }
}

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("explorer.log").expect("create log file"),
    );

    let mut tree = create_catalog();

    println!("== collapsed");
    print_tree(&tree);

    println!("\n== expand production");
    tree.expand("prod");
    print_tree(&tree);

    println!("\n== reveal prod.sales.orders");
    tree.reveal("prod.sales.orders");
    print_tree(&tree);
    println!(
        "\norders is visible at index {:?}",
        tree.visible_index_of("prod.sales.orders")
    );

    println!("\n== drop the ops schema");
    tree.remove("prod.ops");
    print_tree(&tree);
}
