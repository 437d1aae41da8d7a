//! Reconstruction of trees from their rendering
//!
//! Only the `| - Data: ` lines carry information needed to rebuild a tree;
//! hashes, children and levels are recomputed. Values spanning several lines
//! cannot survive the round trip.

use crate::core::error::*;
use crate::render::{labels, TREE_HEADER};
use crate::tree::MerkleTree;
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, space0},
    combinator::{all_consuming, map_res, rest},
    sequence::{preceded, terminated, tuple},
    IResult,
};

/// One tree inside a numbered rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSection<'a> {
    /// Number from the `Merkle Tree #n` header
    pub number: usize,
    /// Rendering below the header, up to the next header
    pub body: &'a str,
}

fn leaf_value(line: &str) -> IResult<&str, &str> {
    preceded(tuple((space0, tag(labels::DATA))), rest)(line)
}

fn tree_header(line: &str) -> IResult<&str, usize> {
    all_consuming(terminated(
        preceded(tag(TREE_HEADER), map_res(digit1, str::parse::<usize>)),
        space0,
    ))(line)
}

/// Extract every leaf value of a rendering, in file order
pub fn extract_leaf_values(text: &str) -> Result<Vec<String>> {
    let values: Vec<String> = text
        .lines()
        .filter_map(|line| leaf_value(line).ok())
        .map(|(_, value)| value.to_string())
        .collect();

    if values.is_empty() {
        return Err(MtreeError::malformed_tree(format!(
            "no '{}' labels found",
            labels::DATA.trim()
        )));
    }
    Ok(values)
}

/// Split a numbered rendering into its sections. A rendering without any
/// header yields no sections.
pub fn split_numbered(text: &str) -> Vec<TreeSection<'_>> {
    let mut sections = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if let Ok((_, number)) = tree_header(trimmed) {
            if let Some((number, start)) = current.take() {
                sections.push(TreeSection {
                    number,
                    body: &text[start..offset],
                });
            }
            current = Some((number, offset + line.len()));
        }
        offset += line.len();
    }
    if let Some((number, start)) = current {
        sections.push(TreeSection {
            number,
            body: &text[start..],
        });
    }
    sections
}

/// Pick the section numbered `number` out of a numbered rendering
pub fn find_section(text: &str, number: usize) -> Result<TreeSection<'_>> {
    split_numbered(text)
        .into_iter()
        .find(|section| section.number == number)
        .ok_or_else(|| MtreeError::malformed_tree(format!("no section '{TREE_HEADER}{number}'")))
}

impl MerkleTree {
    /// Rebuild a tree from a rendering by re-appending its leaf values
    pub fn from_rendering(text: &str) -> Result<Self> {
        MerkleTree::from_items(extract_leaf_values(text)?)
    }
}
