//! Export of session results for an external renderer

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::mst::{self, MstEdge};
use crate::session::Session;
use crate::viz::{self, RenderScene};

/// Save the current session state and `tree` to the specified directory
pub fn save_results(session: &Session, tree: &[MstEdge], output_dir: &Path) -> Result<()> {
    log::info!("Saving results to {}", output_dir.display());

    fs::create_dir_all(output_dir)?;

    save_summary(session, tree, output_dir)?;
    write_json(&output_dir.join("graph.json"), session.graph())?;
    write_json(
        &output_dir.join("matrices.json"),
        &json!({
            "adjacency": session.adjacency().to_rows(),
            "weights": session.weights().map(|w| w.to_rows()),
        }),
    )?;

    let scene = session.scene();
    write_json(&output_dir.join("scene.json"), &scene)?;
    let mut graphml = File::create(output_dir.join("graph.graphml"))?;
    viz::write_graphml(&scene, &mut graphml)?;

    log::info!("Results saved successfully");
    Ok(())
}

/// Save one animation frame as `frames/frame_NNN.json`, returning its path
pub fn save_frame(scene: &RenderScene, output_dir: &Path, index: usize) -> Result<PathBuf> {
    let frames_dir = output_dir.join("frames");
    fs::create_dir_all(&frames_dir)?;

    let path = frames_dir.join(format!("frame_{:03}.json", index));
    write_json(&path, scene)?;
    log::debug!("Saved frame {} to {}", index, path.display());
    Ok(path)
}

fn save_summary(session: &Session, tree: &[MstEdge], output_dir: &Path) -> Result<()> {
    let adjacency = session.adjacency();
    let summary = mst::summarize(tree, adjacency, session.weights())?;

    let gv = session.gv_input();
    let document = json!({
        "graph_stats": {
            "node_count": session.graph().node_count(),
            "link_count": session.graph().link_count(),
            "weighted": session.weights().is_some(),
        },
        "gv_input": {
            "name": gv.name,
            "size": gv.size,
            "dividers": gv.dividers,
        },
        "mst": summary,
        "mst_edges": tree,
        "theme": session.theme(),
        "mode": session.mode(),
    });

    write_json(&output_dir.join("summary.json"), &document)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Graph;

    #[test]
    fn writes_all_result_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::default();
        session.load_adjacency_from_text("0,1,0\n1,0,1\n0,1,0").unwrap();
        let tree = session.calculate_mst().unwrap();

        save_results(&session, &tree, dir.path()).unwrap();

        for name in ["summary.json", "graph.json", "matrices.json", "scene.json", "graph.graphml"] {
            assert!(dir.path().join(name).exists(), "missing {}", name);
        }

        let graph: Graph =
            serde_json::from_str(&fs::read_to_string(dir.path().join("graph.json")).unwrap()).unwrap();
        assert_eq!(&graph, session.graph());

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["mst"]["edge_count"], 2);
        assert_eq!(summary["mst"]["spanning"], true);
        assert_eq!(summary["mst_edges"], json!([[0, 1], [1, 2]]));
    }

    #[test]
    fn frames_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::default();
        let path = save_frame(&session.scene(), dir.path(), 7).unwrap();
        assert!(path.ends_with("frames/frame_007.json"));
        assert!(path.exists());
    }
}
