//! Render-ready scene description for the force-graph surface
//!
//! The rendering surface is external. This module maps the canonical
//! [`Graph`] plus the highlight onto per-node and per-link styling so the
//! surface only has to draw.

use std::io::{self, Write};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graph::model::Graph;
use crate::highlight::HighlightModel;

/// Width of a link in the highlighted subgraph
pub const HIGHLIGHT_LINK_WIDTH: f64 = 6.0;

/// Width of any other link
pub const LINK_WIDTH: f64 = 2.0;

/// Color palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub background: String,
    pub secondary: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeName::Dark => Theme {
                primary: "white".into(),
                background: "black".into(),
                secondary: "lightgrey".into(),
                text: "darkgrey".into(),
                accent: "red".into(),
            },
            ThemeName::Light => Theme {
                primary: "black".into(),
                background: "white".into(),
                secondary: "black".into(),
                text: "darkgrey".into(),
                accent: "red".into(),
            },
        }
    }
}

/// 2D canvas or 3D scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::TwoD => DisplayMode::ThreeD,
            DisplayMode::ThreeD => DisplayMode::TwoD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: usize,
    pub color: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLink {
    pub source: usize,
    pub target: usize,
    pub color: String,
    pub width: f64,
    pub highlighted: bool,
}

/// Everything the rendering surface needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    pub mode: DisplayMode,
    pub background: String,
    pub text_color: String,
    pub nodes: Vec<SceneNode>,
    pub links: Vec<SceneLink>,
}

impl RenderScene {
    /// Style `graph` with `theme`; `highlight` is ignored when `None`
    pub fn build(
        graph: &Graph,
        highlight: Option<&HighlightModel>,
        theme: &Theme,
        mode: DisplayMode,
    ) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| {
                let highlighted = highlight.map_or(false, |h| h.is_node_highlighted(node.id));
                SceneNode {
                    id: node.id,
                    color: if highlighted {
                        theme.accent.clone()
                    } else {
                        theme.primary.clone()
                    },
                    highlighted,
                }
            })
            .collect();

        let links = graph
            .links
            .iter()
            .map(|link| {
                let highlighted =
                    highlight.map_or(false, |h| h.is_link_highlighted(link.source, link.target));
                let (color, width) = if highlighted {
                    (theme.accent.clone(), HIGHLIGHT_LINK_WIDTH)
                } else {
                    (theme.secondary.clone(), LINK_WIDTH)
                };
                SceneLink {
                    source: link.source,
                    target: link.target,
                    color,
                    width,
                    highlighted,
                }
            })
            .collect();

        Self {
            mode,
            background: theme.background.clone(),
            text_color: theme.text.clone(),
            nodes,
            links,
        }
    }

    pub fn highlighted_links(&self) -> impl Iterator<Item = &SceneLink> {
        self.links.iter().filter(|link| link.highlighted)
    }

    /// One-line description of the highlighted links, e.g. `1-2 2-3`
    pub fn describe_highlight(&self) -> String {
        self.highlighted_links()
            .map(|link| format!("{}-{}", link.source, link.target))
            .join(" ")
    }
}

/// Write a scene as undirected GraphML with color and width attributes
pub fn write_graphml<W: Write>(scene: &RenderScene, out: &mut W) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(out, "  <key id=\"color\" for=\"all\" attr.name=\"color\" attr.type=\"string\"/>")?;
    writeln!(out, "  <key id=\"width\" for=\"edge\" attr.name=\"width\" attr.type=\"double\"/>")?;
    writeln!(out, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for node in &scene.nodes {
        writeln!(
            out,
            "    <node id=\"n{}\">\n      <data key=\"color\">{}</data>\n    </node>",
            node.id, node.color
        )?;
    }

    for (edge_id, link) in scene.links.iter().enumerate() {
        writeln!(
            out,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\">\n      <data key=\"color\">{}</data>\n      <data key=\"width\">{}</data>\n    </edge>",
            edge_id, link.source, link.target, link.color, link.width
        )?;
    }

    writeln!(out, "  </graph>")?;
    writeln!(out, "</graphml>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{Link, Node};
    use crate::highlight::highlight_from_mst;

    fn triangle() -> Graph {
        Graph {
            nodes: vec![Node { id: 1 }, Node { id: 2 }, Node { id: 3 }],
            links: vec![Link::new(1, 2), Link::new(1, 3), Link::new(2, 3)],
        }
    }

    #[test]
    fn highlighted_links_use_accent_and_width() {
        let mut highlight = HighlightModel::new();
        highlight.set_highlighted(highlight_from_mst(&[(0, 1), (1, 2)], 3));

        let theme = ThemeName::Dark.palette();
        let scene = RenderScene::build(&triangle(), Some(&highlight), &theme, DisplayMode::TwoD);

        assert_eq!(scene.background, "black");
        assert_eq!(scene.describe_highlight(), "1-2 2-3");

        let plain = &scene.links[1];
        assert_eq!(plain.color, "lightgrey");
        assert_eq!(plain.width, LINK_WIDTH);
        assert_eq!(scene.links[0].color, "red");
        assert_eq!(scene.links[0].width, HIGHLIGHT_LINK_WIDTH);
    }

    #[test]
    fn hidden_highlight_styles_nothing() {
        let theme = ThemeName::Light.palette();
        let scene = RenderScene::build(&triangle(), None, &theme, DisplayMode::ThreeD);
        assert_eq!(scene.highlighted_links().count(), 0);
        assert!(scene.nodes.iter().all(|n| n.color == "black"));
    }

    #[test]
    fn toggles_flip() {
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(DisplayMode::ThreeD.toggled().toggled(), DisplayMode::ThreeD);
        assert_eq!(serde_json::to_string(&DisplayMode::TwoD).unwrap(), "\"2D\"");
    }

    #[test]
    fn graphml_lists_every_element() {
        let theme = ThemeName::Dark.palette();
        let scene = RenderScene::build(&triangle(), None, &theme, DisplayMode::TwoD);
        let mut buffer = Vec::new();
        write_graphml(&scene, &mut buffer).unwrap();
        let xml = String::from_utf8(buffer).unwrap();

        assert_eq!(xml.matches("<node ").count(), 3);
        assert_eq!(xml.matches("<edge ").count(), 3);
        assert!(xml.contains("source=\"n1\" target=\"n3\""));
        assert!(xml.trim_end().ends_with("</graphml>"));
    }
}
