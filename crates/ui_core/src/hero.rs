//! Scattered cutout imagery for the featured exhibition hero.

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

pub const PEOPLE_CUTOUTS: [u32; 4] = [17, 18, 19, 20];
pub const TEXTURE_CUTOUTS: [u32; 3] = [1, 23, 24];
pub const DEFAULT_CUTOUTS: [u32; 3] = [1, 17, 19];

const PEOPLE_SCALE: f64 = 1.5;
const OVERALL_SCALE: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    pub top: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub right: &'static str,
    pub width_percent: f64,
    pub height_percent: f64,
    pub rotate_deg: i32,
    pub z_index: i32,
}

const SLOTS: [Slot; 3] = [
    Slot {
        top: Some("10%"),
        bottom: None,
        right: "5%",
        width_percent: 35.0,
        height_percent: 50.0,
        rotate_deg: 5,
        z_index: 20,
    },
    Slot {
        top: Some("45%"),
        bottom: None,
        right: "2%",
        width_percent: 32.0,
        height_percent: 45.0,
        rotate_deg: -8,
        z_index: 25,
    },
    Slot {
        top: None,
        bottom: Some("15%"),
        right: "20%",
        width_percent: 28.0,
        height_percent: 40.0,
        rotate_deg: 12,
        z_index: 15,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCutout {
    pub image: u32,
    pub src: String,
    pub slot: Slot,
    pub scale: f64,
    /// Entrance animation delay.
    pub delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCutouts {
    images: Vec<u32>,
}

impl Default for HeroCutouts {
    fn default() -> Self {
        Self::fixed(&DEFAULT_CUTOUTS)
    }
}

impl HeroCutouts {
    pub fn fixed(images: &[u32]) -> Self {
        Self {
            images: images.to_vec(),
        }
    }

    /// Two people and one texture, drawn without replacement.
    pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut people = PEOPLE_CUTOUTS;
        let mut textures = TEXTURE_CUTOUTS;
        people.shuffle(rng);
        textures.shuffle(rng);
        Self {
            images: vec![people[0], people[1], textures[0]],
        }
    }

    pub fn images(&self) -> &[u32] {
        &self.images
    }

    /// Slots are handed out front to back. Extra images reuse the front slot.
    pub fn placements(&self) -> Vec<PlacedCutout> {
        let mut slots = SLOTS;
        slots.sort_by(|a, b| b.z_index.cmp(&a.z_index));

        self.images
            .iter()
            .enumerate()
            .map(|(position, &image)| {
                let base = if PEOPLE_CUTOUTS.contains(&image) {
                    PEOPLE_SCALE
                } else {
                    1.0
                };
                PlacedCutout {
                    image,
                    src: cutout_src(image),
                    slot: slots.get(position).copied().unwrap_or(slots[0]),
                    scale: base * OVERALL_SCALE,
                    delay_secs: position as f64 * 0.2,
                }
            })
            .collect()
    }
}

pub fn cutout_src(image: u32) -> String {
    if image == 1 {
        "/images/cutouts/1.png".to_string()
    } else {
        format!("/images/cutouts/image {image}.png")
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn randomized_set_has_two_people_and_one_texture() {
        for seed in 0..50 {
            let cutouts = HeroCutouts::randomize(&mut StdRng::seed_from_u64(seed));
            let images = cutouts.images();
            assert_eq!(images.len(), 3);
            assert!(PEOPLE_CUTOUTS.contains(&images[0]));
            assert!(PEOPLE_CUTOUTS.contains(&images[1]));
            assert_ne!(images[0], images[1]);
            assert!(TEXTURE_CUTOUTS.contains(&images[2]));
        }
    }

    #[test]
    fn placements_fill_front_slots_first() {
        let placed = HeroCutouts::default().placements();
        let z: Vec<i32> = placed.iter().map(|p| p.slot.z_index).collect();
        assert_eq!(z, vec![25, 20, 15]);
        assert_eq!(placed[0].src, "/images/cutouts/1.png");
        assert!((placed[0].scale - 0.75).abs() < 1e-9);
        assert!((placed[1].scale - 1.125).abs() < 1e-9);
    }

    #[test]
    fn extra_images_reuse_front_slot() {
        let placed = HeroCutouts::fixed(&[17, 18, 19, 20]).placements();
        assert_eq!(placed[3].slot.z_index, 25);
        assert_eq!(placed[3].src, "/images/cutouts/image 20.png");
    }
}
