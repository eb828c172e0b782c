//! Typed queries over parsed HTML documents
//!
//! `PageDocument` owns a parsed tree and is never mutated after creation.
//! Lookups go through `NodeQuery`, a compiled CSS selector, and return
//! `Option`/`Vec` so that "control missing" and "zero matches" stay distinct.

use scraper::{ElementRef, Html, Selector};

use crate::infrastructure::crawl_error::{CrawlError, CrawlResult};

/// A compiled CSS selector that remembers its source text.
#[derive(Debug, Clone)]
pub struct NodeQuery {
    source: String,
    selector: Selector,
}

impl NodeQuery {
    /// Compile a CSS selector such as `div.sales.text-center.mb-3`.
    pub fn parse(css: &str) -> CrawlResult<Self> {
        let selector =
            Selector::parse(css).map_err(|e| CrawlError::invalid_selector(css, e))?;
        Ok(Self {
            source: css.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Outcome of a text lookup: a missing node is not the same as a blank one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NotFound,
    Found(String),
}

impl Lookup {
    /// Turn `NotFound` into a `MissingField` error for `field`.
    pub fn require(self, field: &str) -> CrawlResult<String> {
        match self {
            Self::Found(text) => Ok(text),
            Self::NotFound => Err(CrawlError::missing_field(field)),
        }
    }
}

/// A borrowed element of a `PageDocument`.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Concatenated text of every descendant, untrimmed.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn find_first(&self, query: &NodeQuery) -> Option<Node<'a>> {
        self.element
            .select(&query.selector)
            .next()
            .map(|element| Node { element })
    }

    pub fn find_all(&self, query: &NodeQuery) -> Vec<Node<'a>> {
        self.element
            .select(&query.selector)
            .map(|element| Node { element })
            .collect()
    }

    /// Text of the first match, or `Lookup::NotFound`.
    pub fn lookup_text(&self, query: &NodeQuery) -> Lookup {
        self.find_first(query)
            .map_or(Lookup::NotFound, |node| Lookup::Found(node.text()))
    }
}

/// A fetched and parsed page.
#[derive(Debug)]
pub struct PageDocument {
    url: String,
    html: Html,
}

impl PageDocument {
    /// Parse `body` fetched from `url`. An empty body gives an empty tree.
    pub fn parse(url: &str, body: &str) -> Self {
        Self {
            url: url.to_string(),
            html: Html::parse_document(body),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn find_first(&self, query: &NodeQuery) -> Option<Node<'_>> {
        self.root().find_first(query)
    }

    pub fn find_all(&self, query: &NodeQuery) -> Vec<Node<'_>> {
        self.root().find_all(query)
    }
}
