//! tsParticles options for the sparks scene
//!
//! The structs mirror the option tree tsParticles 2.x reads from
//! `tsParticles.load`. Field names serialize to the library's camelCase keys;
//! the legacy `anim` blocks keep their snake_case `opacity_min`/`size_min`.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Element id the library renders into
pub const CONTAINER_ID: &str = "tsparticles";

/// Scene background, also used as the trail fill so tails fade into it
pub const BACKGROUND_COLOR: &str = "#000000";

/// Warm off-white, amber, deep orange
pub const SPARK_PALETTE: [&str; 3] = ["#fffcf2", "#ffd166", "#fca311"];

/// Root of the options tree passed to the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub fps_limit: u32,
    pub background: Background,
    pub particles: Particles,
    pub detect_retina: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particles {
    pub number: ParticleNumber,
    pub color: Palette,
    pub shape: Shape,
    pub opacity: Opacity,
    pub size: Size,
    #[serde(rename = "move")]
    pub movement: Movement,
    pub trail: Trail,
    pub rotate: Rotate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleNumber {
    pub value: u32,
    pub density: Density,
}

/// Scales the particle count to the canvas area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub enable: bool,
    /// Reference area in CSS px²
    pub area: u32,
}

/// Colors picked at random per particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub value: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opacity {
    pub value: f64,
    pub random: bool,
    pub anim: OpacityAnimation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityAnimation {
    pub enable: bool,
    pub speed: f64,
    pub opacity_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub value: f64,
    pub random: RandomRange,
    pub anim: SizeAnimation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomRange {
    pub enable: bool,
    pub minimum_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeAnimation {
    pub enable: bool,
    pub speed: f64,
    pub size_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub enable: bool,
    pub speed: f64,
    pub direction: String,
    pub random: bool,
    pub straight: bool,
    pub out_modes: OutModes,
    pub attract: Toggle,
}

/// What happens to a particle that leaves the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutModes {
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub enable: bool,
}

/// Fading tails: the canvas is washed with `fill_color` instead of cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub enable: bool,
    /// Frames a tail persists
    pub length: u32,
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotate {
    pub value: u32,
    pub random: bool,
    pub direction: String,
    pub animation: RotateAnimation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotateAnimation {
    pub enable: bool,
    pub speed: f64,
    pub sync: bool,
}

impl SceneConfig {
    /// Upward-drifting sparks with glowing, desynchronized flicker
    pub fn sparks() -> Self {
        Self {
            fps_limit: 60,
            background: Background {
                color: BACKGROUND_COLOR.to_string(),
            },
            particles: Particles {
                number: ParticleNumber {
                    value: 100,
                    density: Density {
                        enable: true,
                        area: 800,
                    },
                },
                color: Palette {
                    value: SPARK_PALETTE.iter().map(|c| c.to_string()).collect(),
                },
                shape: Shape {
                    kind: "circle".to_string(),
                },
                opacity: Opacity {
                    value: 0.8,
                    random: true,
                    anim: OpacityAnimation {
                        enable: true,
                        speed: 1.0,
                        opacity_min: 0.3,
                        sync: false,
                    },
                },
                size: Size {
                    value: 2.0,
                    random: RandomRange {
                        enable: true,
                        minimum_value: 1.0,
                    },
                    anim: SizeAnimation {
                        enable: true,
                        speed: 2.0,
                        size_min: 0.5,
                        sync: false,
                    },
                },
                movement: Movement {
                    enable: true,
                    speed: 3.0,
                    direction: "top".to_string(),
                    random: true,
                    straight: false,
                    out_modes: OutModes {
                        default: "out".to_string(),
                    },
                    attract: Toggle { enable: false },
                },
                trail: Trail {
                    enable: true,
                    length: 10,
                    fill_color: BACKGROUND_COLOR.to_string(),
                },
                rotate: Rotate {
                    value: 0,
                    random: true,
                    direction: "random".to_string(),
                    animation: RotateAnimation {
                        enable: true,
                        speed: 15.0,
                        sync: false,
                    },
                },
            },
            detect_retina: true,
        }
    }

    /// Serialize to the JSON literal embedded in the scene script
    pub fn to_json(&self) -> Result<String, RenderError> {
        serde_json::to_string_pretty(self).map_err(|e| RenderError::SceneSerialize(e.to_string()))
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value, RenderError> {
        serde_json::to_value(self).map_err(|e| RenderError::SceneSerialize(e.to_string()))
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::sparks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scene_value() -> serde_json::Value {
        SceneConfig::sparks().to_value().unwrap()
    }

    #[test]
    fn test_top_level_keys() {
        let value = scene_value();
        assert_eq!(value["fpsLimit"], json!(60));
        assert_eq!(value["background"]["color"], json!("#000000"));
        assert_eq!(value["detectRetina"], json!(true));
    }

    #[test]
    fn test_particle_number() {
        let value = scene_value();
        assert_eq!(value.pointer("/particles/number/value"), Some(&json!(100)));
        assert_eq!(
            value.pointer("/particles/number/density"),
            Some(&json!({ "enable": true, "area": 800 }))
        );
    }

    #[test]
    fn test_palette_order() {
        let value = scene_value();
        assert_eq!(
            value["particles"]["color"]["value"],
            json!(["#fffcf2", "#ffd166", "#fca311"])
        );
        assert_eq!(value["particles"]["shape"]["type"], json!("circle"));
    }

    #[test]
    fn test_motion() {
        let value = scene_value();
        let movement = &value["particles"]["move"];
        assert_eq!(movement["enable"], json!(true));
        assert_eq!(movement["direction"], json!("top"));
        assert_eq!(movement["speed"].as_f64(), Some(3.0));
        assert_eq!(movement["random"], json!(true));
        assert_eq!(movement["straight"], json!(false));
        assert_eq!(movement["outModes"]["default"], json!("out"));
        assert_eq!(movement["attract"]["enable"], json!(false));
    }

    #[test]
    fn test_opacity_flicker() {
        let value = scene_value();
        let opacity = &value["particles"]["opacity"];
        assert_eq!(opacity["value"].as_f64(), Some(0.8));
        assert_eq!(opacity["random"], json!(true));
        assert_eq!(opacity["anim"]["enable"], json!(true));
        assert_eq!(opacity["anim"]["speed"].as_f64(), Some(1.0));
        assert_eq!(opacity["anim"]["opacity_min"].as_f64(), Some(0.3));
        assert_eq!(opacity["anim"]["sync"], json!(false));
    }

    #[test]
    fn test_size_shrink() {
        let value = scene_value();
        let size = &value["particles"]["size"];
        assert_eq!(size["value"].as_f64(), Some(2.0));
        assert_eq!(size["random"]["enable"], json!(true));
        assert_eq!(size["random"]["minimumValue"].as_f64(), Some(1.0));
        assert_eq!(size["anim"]["speed"].as_f64(), Some(2.0));
        assert_eq!(size["anim"]["size_min"].as_f64(), Some(0.5));
        assert_eq!(size["anim"]["sync"], json!(false));
    }

    #[test]
    fn test_rotation() {
        let value = scene_value();
        let rotate = &value["particles"]["rotate"];
        assert_eq!(rotate["value"], json!(0));
        assert_eq!(rotate["random"], json!(true));
        assert_eq!(rotate["direction"], json!("random"));
        assert_eq!(rotate["animation"]["speed"].as_f64(), Some(15.0));
        assert_eq!(rotate["animation"]["sync"], json!(false));
    }

    #[test]
    fn test_trail_fills_with_background() {
        let scene = SceneConfig::sparks();
        assert!(scene.particles.trail.enable);
        assert_eq!(scene.particles.trail.length, 10);
        assert_eq!(scene.particles.trail.fill_color, scene.background.color);

        let value = scene_value();
        assert_eq!(
            value["particles"]["trail"]["fillColor"],
            value["background"]["color"]
        );
    }

    #[test]
    fn test_json_round_trips_to_same_scene() {
        let json = SceneConfig::sparks().to_json().unwrap();
        let parsed: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SceneConfig::default());
    }

    #[test]
    fn test_json_is_script_safe() {
        let json = SceneConfig::sparks().to_json().unwrap();
        assert!(!json.contains("</"));
    }
}
