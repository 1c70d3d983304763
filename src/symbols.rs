use std::collections::HashMap;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, SymbolError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    NotFound(String),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolError::NotFound(name) => write!(f, "Symbol '{}' not found", name),
        }
    }
}

impl error::Error for SymbolError {}

/// A name exported by the toolchain. The section is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: i64,
    pub section: Option<String>,
}

impl Symbol {
    pub fn new(name: &str, value: i64, section: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            value,
            section: section.map(|s| s.to_owned()),
        }
    }
}

/// What to keep when merging two tables defining the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStyle {
    PreferCurrent,
    PreferNew,
}

#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    // Records in first insertion order
    symbols: Vec<Symbol>,
    // Map from symbol name to its position in `symbols`
    positions: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut table = Self::default();
        for symbol in records {
            table.add_symbol(symbol);
        }

        table
    }

    /*
     * add_symbol
     * A name registered twice keeps its first position and takes the last
     * record.
     */
    fn add_symbol(&mut self, symbol: Symbol) {
        match self.positions.get(&symbol.name) {
            Some(&position) => self.symbols[position] = symbol,
            None => {
                self.positions
                    .insert(symbol.name.clone(), self.symbols.len());
                self.symbols.push(symbol);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn sym(&self, name: &str) -> Result<&Symbol> {
        self.positions
            .get(name)
            .map(|&position| &self.symbols[position])
            .ok_or_else(|| SymbolError::NotFound(name.to_owned()))
    }

    pub fn value(&self, name: &str) -> Result<i64> {
        self.sym(name).map(|symbol| symbol.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.symbols.iter().map(|s| (s.name.as_str(), s.value))
    }

    /// Every name bound to `value`, in insertion order.
    pub fn symbols_at(&self, value: i64) -> Vec<&str> {
        self.symbols
            .iter()
            .filter(|s| s.value == value)
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn merge(&self, other: &SymbolTable, style: MergeStyle) -> SymbolTable {
        let mut table = self.clone();
        for symbol in other.symbols.iter() {
            if style == MergeStyle::PreferCurrent && table.contains(&symbol.name) {
                continue;
            }
            table.add_symbol(symbol.clone());
        }

        table
    }
}
