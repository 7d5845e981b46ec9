//! Achsenparallele Bounding-Boxen (AABB) in 3D.

use glam::{Mat4, Vec3};

/// Achsenparallele Bounding-Box mit minimaler und maximaler Ecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Degenerierte Box der Größe Null im Ursprung.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Erstellt eine Box aus zwei beliebigen, gegenüberliegenden Ecken.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinste Box, die alle Punkte umschließt. `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, point| {
            Some(match acc {
                Some(bounds) => Self {
                    min: bounds.min.min(point),
                    max: bounds.max.max(point),
                },
                None => Self {
                    min: point,
                    max: point,
                },
            })
        })
    }

    /// Die 8 Eckpunkte der Box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Transformiert alle 8 Ecken mit `transform` und umschließt das Ergebnis neu.
    ///
    /// `transform` muss affin sein (keine perspektivische Division).
    pub fn transformed(&self, transform: &Mat4) -> Self {
        let corners = self.corners().map(|corner| transform.transform_point3(corner));
        Self::from_points(corners).unwrap_or(*self)
    }

    /// Vereinigung zweier Boxen.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Kantenlängen der Box.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
