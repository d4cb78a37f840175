//! JSON encoder: the scene graph as pretty-printed serde JSON

use crate::error::RenderResult;
use crate::scene::Scene;

use super::SceneEncoder;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl SceneEncoder for JsonEncoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, scene: &Scene) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(scene)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Color, Paint, Rect};

    #[test]
    fn test_json_round_trips_scene() {
        let mut scene = Scene::new(20.0, 10.0).with_background(Color::WHITE);
        scene.push(Rect::new(1.0, 2.0, 3.0, 4.0, Paint::fill(Color::BLACK)).with_class("bar"));

        let json = JsonEncoder.encode(&scene).unwrap();
        assert!(json.contains("\"type\": \"rect\""));
        assert!(json.contains("\"background\": \"#ffffff\""));

        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }
}
