/// A table the completion provider is allowed to query, with its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescription {
    name: &'static str,
    columns: &'static [&'static str],
}

impl TableDescription {
    pub const fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self { name, columns }
    }
}

const INVENTORY_TABLES: &[TableDescription] = &[
    TableDescription::new("product", &["id", "name", "quantity", "price", "supplier_id"]),
    TableDescription::new("supplier", &["id", "name"]),
];

/// Static description of the queryable schema, rendered once for prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescription {
    tables: &'static [TableDescription],
    rendered: String,
}

impl SchemaDescription {
    pub fn new(tables: &'static [TableDescription]) -> Self {
        let rendered = tables
            .iter()
            .map(|t| format!("{} ({})", t.name, t.columns.join(", ")))
            .collect::<Vec<_>>()
            .join(", ");
        Self { tables, rendered }
    }

    /// The `product` and `supplier` tables backing the inventory store.
    pub fn inventory() -> Self {
        Self::new(INVENTORY_TABLES)
    }

    pub fn tables(&self) -> &[TableDescription] {
        self.tables
    }

    /// e.g. `product (id, name, quantity, price, supplier_id), supplier (id, name)`
    pub fn as_text(&self) -> &str {
        &self.rendered
    }
}

impl Default for SchemaDescription {
    fn default() -> Self {
        Self::inventory()
    }
}
