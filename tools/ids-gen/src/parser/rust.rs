//! Parser for a generated Rust identifier table using syn

use anyhow::{Context, Result};
use quote::ToTokens;
use std::path::Path;
use syn::{Expr, Item, ItemConst, ItemMod, Lit};

use super::ParseError;
use crate::model::{Category, CategorySection, IdEntry, IdTable};

/// Parse a generated table (e.g. `audio-ids/src/generated.rs`) from disk
pub fn parse_table_file(path: impl AsRef<Path>) -> Result<IdTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_table_source(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse Rust source holding one `pub mod` per category.
///
/// Only `pub const` items are collected. Reference-typed items (the `ENTRIES`
/// slice) and anything outside a category module are ignored.
pub fn parse_table_source(source: &str) -> Result<IdTable, ParseError> {
    let file = syn::parse_file(source)?;
    let mut table = IdTable::default();

    for item in &file.items {
        if let Item::Mod(item_mod) = item {
            if let Some(section) = parse_category_module(item_mod)? {
                table.sections.push(section);
            }
        }
    }

    Ok(table)
}

fn parse_category_module(item_mod: &ItemMod) -> Result<Option<CategorySection>, ParseError> {
    if !matches!(item_mod.vis, syn::Visibility::Public(_)) {
        return Ok(None);
    }

    let module = item_mod.ident.to_string();
    let Some(category) = Category::from_module_name(&module) else {
        return Ok(None);
    };

    let mut entries = Vec::new();
    if let Some((_, items)) = &item_mod.content {
        for item in items {
            if let Item::Const(const_item) = item {
                if !matches!(const_item.vis, syn::Visibility::Public(_)) {
                    continue;
                }
                if matches!(*const_item.ty, syn::Type::Reference(_)) {
                    continue;
                }
                entries.push(parse_constant(&module, const_item)?);
            }
        }
    }

    Ok(Some(CategorySection { category, entries }))
}

fn parse_constant(module: &str, const_item: &ItemConst) -> Result<IdEntry, ParseError> {
    let name = const_item.ident.to_string();
    let invalid = |reason: String| ParseError::InvalidConstant {
        module: module.to_string(),
        name: name.clone(),
        reason,
    };

    let Expr::Lit(expr_lit) = &*const_item.expr else {
        return Err(invalid(format!(
            "expected an integer literal, found `{}`",
            const_item.expr.to_token_stream()
        )));
    };
    let Lit::Int(lit_int) = &expr_lit.lit else {
        return Err(invalid(format!(
            "expected an integer literal, found `{}`",
            expr_lit.lit.to_token_stream()
        )));
    };

    let value = lit_int
        .base10_parse::<u32>()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(IdEntry { name, value })
}
