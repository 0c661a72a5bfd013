//! Text and JSON renderings of command results.

use bitcube::{Color, CubeState, FaceId, Move, FACE_COUNT, FACELETS_PER_FACE};
use clap::ValueEnum;
use serde::Serialize;

/// Output encoding chosen with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable net and tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializable snapshot of a cube and the moves that produced it.
#[derive(Debug, Serialize)]
pub struct StateView<'a> {
    #[serde(skip)]
    cube: CubeState,
    /// Seed the moves were drawn from, when they were random.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Moves applied to the solved cube, in order.
    pub moves: &'a [Move],
    /// Whether the result is the solved cube.
    pub solved: bool,
    /// Face names in storage order.
    pub face_order: [&'static str; FACE_COUNT],
    /// Facelet colors per face, row-major.
    pub colors: [[u8; FACELETS_PER_FACE]; FACE_COUNT],
    /// Raw packed words.
    pub words: [u32; FACE_COUNT],
}

impl<'a> StateView<'a> {
    /// Snapshot `cube`.
    pub fn new(cube: &CubeState, moves: &'a [Move], seed: Option<u64>) -> Self {
        let faces = cube.faces();
        Self {
            cube: *cube,
            seed,
            moves,
            solved: cube.is_solved(),
            face_order: FaceId::ALL.map(face_name),
            colors: faces.map(|f| f.colors().map(Color::value)),
            words: faces.map(|f| f.bits()),
        }
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Json => serde_json::to_string_pretty(self),
            Format::Text => {
                let mut out = String::new();
                if let Some(seed) = self.seed {
                    out.push_str(&format!("seed:  {seed}\n"));
                }
                out.push_str(&format!("moves: {}\n\n", join_moves(self.moves)));
                out.push_str(&self.cube.to_string());
                out.push_str(&format!("\n\nsolved: {}", self.solved));
                Ok(out)
            }
        }
    }
}

/// Space-separated move labels, or `-` for none.
pub fn join_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "-".to_owned();
    }
    moves
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(" ")
}

fn face_name(id: FaceId) -> &'static str {
    match id {
        FaceId::Up => "up",
        FaceId::Left => "left",
        FaceId::Front => "front",
        FaceId::Right => "right",
        FaceId::Back => "back",
        FaceId::Down => "down",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_moves() {
        assert_eq!(join_moves(&[]), "-");
        assert_eq!(join_moves(&[Move::Right, Move::Up]), "R1 U1");
    }

    #[test]
    fn test_solved_view() {
        let cube = CubeState::new();
        let view = StateView::new(&cube, &[], None);
        assert!(view.solved);
        assert_eq!(view.colors[2], [2; 9]);
        assert_eq!(view.face_order[5], "down");
    }

    #[test]
    fn test_json_shape() -> Result<(), serde_json::Error> {
        let moves = [Move::Front];
        let cube = CubeState::new().turned(Move::Front);
        let json = StateView::new(&cube, &moves, Some(9)).render(Format::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["moves"][0], "F1");
        assert_eq!(value["seed"], 9);
        assert_eq!(value["solved"], false);
        assert_eq!(value["colors"][0][6], 1);
        Ok(())
    }

    #[test]
    fn test_text_has_net_and_status() -> Result<(), serde_json::Error> {
        let cube = CubeState::new();
        let text = StateView::new(&cube, &[], None).render(Format::Text)?;
        assert!(text.starts_with("moves: -"));
        assert!(text.ends_with("solved: true"));
        assert!(text.contains("      W W W"));
        Ok(())
    }

    #[test]
    fn test_text_renders_the_snapshotted_cube() -> Result<(), serde_json::Error> {
        let moves = [Move::Front];
        let view = {
            let cube = CubeState::new().turned(Move::Front);
            StateView::new(&cube, &moves, None)
        };
        let text = view.render(Format::Text)?;
        // Up's bottom row holds Left's former right column after F.
        assert!(text.contains("      O O O\n"));
        assert!(text.ends_with("solved: false"));
        assert!(!view.solved);
        Ok(())
    }
}
