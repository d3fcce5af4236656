//! Front torso/limb panel of the totem.
//!
//! The panel is nine one-pixel rows. Each row is described by a [`RowRule`]:
//! an ordered list of slices taken from the body regions, laid side by side
//! into a strip and pasted at a fixed column.

use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

use crate::domain::skin::BodyRegions;

pub const PATTERN_WIDTH: u32 = 16;
pub const PATTERN_HEIGHT: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    fn image(self, body: &BodyRegions) -> &RgbaImage {
        match self {
            Self::Torso => &body.torso,
            Self::LeftArm => &body.left_arm,
            Self::RightArm => &body.right_arm,
            Self::LeftLeg => &body.left_leg,
            Self::RightLeg => &body.right_leg,
        }
    }
}

/// A one-pixel-tall run of a body part, optionally rescaled to a new width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub part: BodyPart,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub scale_to: Option<u32>,
}

impl Slice {
    const fn new(part: BodyPart, x: u32, y: u32, width: u32) -> Self {
        Self {
            part,
            x,
            y,
            width,
            scale_to: None,
        }
    }

    const fn scaled(part: BodyPart, x: u32, y: u32, width: u32, scale_to: u32) -> Self {
        Self {
            part,
            x,
            y,
            width,
            scale_to: Some(scale_to),
        }
    }

    pub fn output_width(&self) -> u32 {
        self.scale_to.unwrap_or(self.width)
    }

    fn render(&self, body: &BodyRegions) -> RgbaImage {
        let source = imageops::crop_imm(self.part.image(body), self.x, self.y, self.width, 1)
            .to_image();
        match self.scale_to {
            Some(width) if width != self.width => {
                imageops::resize(&source, width, 1, FilterType::Nearest)
            }
            _ => source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRule {
    pub row: u32,
    pub dest_x: u32,
    pub slices: &'static [Slice],
}

impl RowRule {
    pub fn strip_width(&self) -> u32 {
        self.slices.iter().map(Slice::output_width).sum()
    }

    /// Lays the slices out left to right with no gaps.
    pub fn build_strip(&self, body: &BodyRegions) -> RgbaImage {
        let mut strip = RgbaImage::new(self.strip_width(), 1);
        let mut cursor = 0_i64;
        for slice in self.slices {
            let pixels = slice.render(body);
            imageops::overlay(&mut strip, &pixels, cursor, 0);
            cursor += i64::from(pixels.width());
        }
        strip
    }
}

use BodyPart::{LeftArm, LeftLeg, RightArm, RightLeg, Torso};

const fn shoulder(row: u32, arm_row: u32) -> [Slice; 3] {
    [
        Slice::scaled(LeftArm, 0, arm_row, 4, 3),
        Slice::new(Torso, 0, row, 8),
        Slice::scaled(RightArm, 0, arm_row, 4, 3),
    ]
}

const fn thigh(leg_row: u32) -> [Slice; 2] {
    [
        Slice::new(LeftLeg, 1, leg_row, 3),
        Slice::new(RightLeg, 0, leg_row, 3),
    ]
}

const SHOULDER_TOP: [Slice; 3] = shoulder(0, 0);
const SHOULDER_MID: [Slice; 3] = shoulder(1, 10);
const SHOULDER_LOW: [Slice; 3] = shoulder(2, 11);
const WAIST: [Slice; 3] = [
    Slice::new(LeftArm, 2, 11, 2),
    Slice::new(Torso, 0, 3, 8),
    Slice::new(RightArm, 0, 11, 2),
];
const BELLY: [Slice; 1] = [Slice::new(Torso, 0, 4, 8)];
const THIGH_TOP: [Slice; 2] = thigh(0);
const THIGH_LOW: [Slice; 2] = thigh(1);
const KNEE: [Slice; 2] = thigh(10);
const ANKLE: [Slice; 2] = [
    Slice::new(LeftLeg, 2, 11, 2),
    Slice::new(RightLeg, 0, 11, 2),
];

#[rustfmt::skip]
pub const PATTERN_ROWS: [RowRule; 9] = [
    RowRule { row: 0, dest_x: 1, slices: &SHOULDER_TOP },
    RowRule { row: 1, dest_x: 1, slices: &SHOULDER_MID },
    RowRule { row: 2, dest_x: 1, slices: &SHOULDER_LOW },
    RowRule { row: 3, dest_x: 2, slices: &WAIST },
    RowRule { row: 4, dest_x: 4, slices: &BELLY },
    RowRule { row: 5, dest_x: 5, slices: &THIGH_TOP },
    RowRule { row: 6, dest_x: 5, slices: &THIGH_LOW },
    RowRule { row: 7, dest_x: 5, slices: &KNEE },
    RowRule { row: 8, dest_x: 6, slices: &ANKLE },
];

/// Builds the 16x9 panel from already symmetry-resolved body regions.
pub fn assemble(body: &BodyRegions) -> RgbaImage {
    assemble_with(&PATTERN_ROWS, body)
}

fn assemble_with(rules: &[RowRule], body: &BodyRegions) -> RgbaImage {
    let mut pattern = RgbaImage::new(PATTERN_WIDTH, PATTERN_HEIGHT);
    for rule in rules {
        let strip = rule.build_strip(body);
        imageops::overlay(
            &mut pattern,
            &strip,
            i64::from(rule.dest_x),
            i64::from(rule.row),
        );
    }
    pattern
}
