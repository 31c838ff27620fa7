//! Tree printer: flatten a collection into one `path -> url` line per request.
//!
//! Folders only contribute to the prefix. Requests become lines. Anything
//! else is skipped without output.

mod entries;
mod summary;

use std::io::{self, Write};

use crate::collection::CollectionNode;

pub use entries::{entries, Entries, Entry, WithMethod, DEFAULT_METHOD, PATH_SEPARATOR};
pub use summary::{summarize, Summary};

/// Output options for a listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Listing {
    /// Put the HTTP method in front of every line.
    pub show_methods: bool,
}

impl Listing {
    /// Writes one line per request under `nodes`, each starting with `prefix`.
    /// Returns the number of lines written.
    pub fn write<W: Write>(
        &self,
        nodes: &[CollectionNode],
        prefix: &str,
        out: &mut W,
    ) -> io::Result<usize> {
        let mut lines = 0;
        for entry in Entries::new(nodes, prefix) {
            if self.show_methods {
                writeln!(out, "{}", entry.with_method())?;
            } else {
                writeln!(out, "{entry}")?;
            }
            lines += 1;
        }
        Ok(lines)
    }
}

/// Writes the plain listing of `nodes` to `out`.
pub fn print_items<W: Write>(
    nodes: &[CollectionNode],
    prefix: &str,
    out: &mut W,
) -> io::Result<usize> {
    Listing::default().write(nodes, prefix, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{parse_collection, Folder, RequestItem, RequestSpec};

    fn listing(json: &str) -> String {
        let c = parse_collection(json.as_bytes()).unwrap();
        let mut out = Vec::new();
        print_items(&c.item, "", &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn mixed_url_shapes_and_folders() {
        let out = listing(
            r#"{"item": [{"name": "Folder1", "item": [{"name": "Req1", "request": {"url": "http://x/1"}}]}, {"name": "Req2", "request": {"url": {"raw": "http://x/2"}}}]}"#,
        );
        assert_eq!(out, "Folder1 / Req1 -> http://x/1\nReq2 -> http://x/2\n");
    }

    #[test]
    fn nested_folders_accumulate_prefix() {
        let out = listing(
            r#"{"item": [{"name": "A", "item": [{"name": "B", "item": [{"name": "R", "request": {"url": "u"}}]}]}]}"#,
        );
        assert_eq!(out, "A / B / R -> u\n");
    }

    #[test]
    fn preserves_sibling_order_depth_first() {
        let out = listing(
            r#"{"item": [
                {"name": "r1", "request": {"url": "1"}},
                {"name": "F", "item": [
                    {"name": "r2", "request": {"url": "2"}},
                    {"name": "G", "item": [{"name": "r3", "request": {"url": "3"}}]},
                    {"name": "r4", "request": {"url": "4"}}
                ]},
                {"name": "r5", "request": {"url": "5"}}
            ]}"#,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "r1 -> 1",
                "F / r2 -> 2",
                "F / G / r3 -> 3",
                "F / r4 -> 4",
                "r5 -> 5"
            ]
        );
    }

    #[test]
    fn plain_and_raw_urls_render_identically() {
        let plain = listing(r#"{"item": [{"name": "R", "request": {"url": "http://h/p?q=1"}}]}"#);
        let raw = listing(r#"{"item": [{"name": "R", "request": {"url": {"raw": "http://h/p?q=1"}}}]}"#);
        assert_eq!(plain, raw);
    }

    #[test]
    fn missing_raw_gives_empty_url() {
        let out = listing(r#"{"item": [{"name": "R", "request": {"url": {"host": ["h"]}}}]}"#);
        assert_eq!(out, "R -> \n");
    }

    #[test]
    fn unclassified_node_is_skipped() {
        let out = listing(
            r#"{"item": [{"name": "ghost"}, {"name": "R", "request": {"url": "u"}}, {"name": "ghost2", "description": "x"}]}"#,
        );
        assert_eq!(out, "R -> u\n");
    }

    #[test]
    fn empty_folders_emit_nothing() {
        let out = listing(r#"{"item": [{"name": "F", "item": []}, {"name": "G", "item": [{"name": "H", "item": []}]}]}"#);
        assert_eq!(out, "");
    }

    #[test]
    fn line_count_matches_request_count() {
        let c = parse_collection(
            br#"{"item": [
                {"name": "F", "item": [{"name": "a", "request": "1"}, {"name": "b", "request": "2"}, {"nope": 1}]},
                {"name": "c", "request": "3"},
                {"name": "E", "item": []}
            ]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let written = print_items(&c.item, "", &mut out).unwrap();
        let summary = summarize(&c.item);
        assert_eq!(written, 3);
        assert_eq!(summary.requests, written);
        assert_eq!(summary.folders, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), written);
    }

    #[test]
    fn explicit_prefix_is_prepended() {
        let c = parse_collection(br#"{"item": [{"name": "R", "request": "u"}]}"#).unwrap();
        let mut out = Vec::new();
        print_items(&c.item, "Root / ", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Root / R -> u\n");
    }

    #[test]
    fn methods_are_shown_when_requested() {
        let c = parse_collection(
            br#"{"item": [
                {"name": "create", "request": {"method": "post", "url": "http://x/c"}},
                {"name": "list", "request": {"url": "http://x/l"}},
                {"name": "bare", "request": "http://x/b"}
            ]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        Listing { show_methods: true }
            .write(&c.item, "", &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "POST create -> http://x/c\nGET list -> http://x/l\nGET bare -> http://x/b\n"
        );
    }

    #[test]
    fn entries_expose_structured_fields() {
        let c = parse_collection(
            br#"{"item": [{"name": "Bookings", "item": [{"name": "Cancel", "request": {"method": "DELETE", "url": {"raw": "/b/1"}}}]}]}"#,
        )
        .unwrap();
        let all: Vec<Entry<'_>> = entries(&c.item).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].prefix, "Bookings / ");
        assert_eq!(all[0].name, "Cancel");
        assert_eq!(all[0].method, Some("DELETE"));
        assert_eq!(all[0].url, "/b/1");
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        const DEPTH: usize = 1_000;
        let mut node = CollectionNode::Request(RequestItem {
            name: "leaf".to_string(),
            request: RequestSpec::Url("u".to_string()),
        });
        for _ in 0..DEPTH {
            node = CollectionNode::Folder(Folder {
                name: "f".to_string(),
                item: vec![node],
            });
        }
        let nodes = vec![node];
        let all: Vec<Entry<'_>> = entries(&nodes).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].prefix, "f / ".repeat(DEPTH));
        assert_eq!(summarize(&nodes).folders, DEPTH);
    }

    #[test]
    fn deeply_nested_document_parses_and_lists() {
        const DEPTH: usize = 1_000;
        let mut json = String::from(r#"{"item": ["#);
        for _ in 0..DEPTH {
            json.push_str(r#"{"name": "f", "item": ["#);
        }
        json.push_str(r#"{"name": "leaf", "request": {"url": "u"}}"#);
        for _ in 0..DEPTH {
            json.push_str("]}");
        }
        json.push_str("]}");

        let out = listing(&json);
        assert_eq!(out, format!("{}leaf -> u\n", "f / ".repeat(DEPTH)));
    }

    #[test]
    fn request_with_wrong_typed_method_is_listed() {
        let out = listing(
            r#"{"item": [{"name": "R", "request": {"method": 5, "url": "http://x"}}, {"name": "N", "request": null}]}"#,
        );
        assert_eq!(out, "R -> http://x\nN -> \n");
    }
}
