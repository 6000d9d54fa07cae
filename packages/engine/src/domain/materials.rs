//! Material definitions
//!
//! Every cell holds exactly one `Material`. Ids are stable `u8` values shared
//! with the host (JS toolbar buttons, zero-copy type buffer), so the
//! discriminants below must never be reordered.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SimError;

pub type MaterialId = u8;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Wood = 4,
    Fire = 5,
    Smoke = 6,
    Acid = 7,
    Gunpowder = 8,
}

pub const MATERIAL_COUNT: usize = 9;

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Wood,
        Material::Fire,
        Material::Smoke,
        Material::Acid,
        Material::Gunpowder,
    ];

    /// What out-of-range reads return: the world edge behaves like solid rock.
    pub const BOUNDARY: Material = Material::Stone;

    #[inline]
    pub const fn id(self) -> MaterialId {
        self as MaterialId
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    pub const fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Stone => "stone",
            Material::Wood => "wood",
            Material::Fire => "fire",
            Material::Smoke => "smoke",
            Material::Acid => "acid",
            Material::Gunpowder => "gunpowder",
        }
    }
}

impl TryFrom<MaterialId> for Material {
    type Error = SimError;

    fn try_from(id: MaterialId) -> Result<Self, Self::Error> {
        Material::ALL
            .get(id as usize)
            .copied()
            .ok_or(SimError::InvalidMaterial(id))
    }
}

impl From<Material> for MaterialId {
    fn from(m: Material) -> Self {
        m.id()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_order() {
        for (i, m) in Material::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Material::try_from(i as u8).unwrap(), *m);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(matches!(Material::try_from(9), Err(SimError::InvalidMaterial(9))));
        assert!(matches!(Material::try_from(255), Err(SimError::InvalidMaterial(255))));
    }

    #[test]
    fn boundary_is_solid_stone() {
        assert_eq!(Material::BOUNDARY, Material::Stone);
        assert!(!Material::BOUNDARY.is_empty());
    }
}
