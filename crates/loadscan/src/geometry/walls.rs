use crate::{
    error::Result,
    geometry::{
        grid::SamplingGrid,
        types::{GridIndex, HeightField, WallPolygon, WallSide},
    },
};
use glam::DVec3;
use serde::Serialize;

/// Vertical container boundary, one quad per adjacent pair of edge samples.
/// The top edge of every quad follows the load surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerWalls {
    pub left: Vec<WallPolygon>,
    pub right: Vec<WallPolygon>,
    pub back: Vec<WallPolygon>,
    pub front: Vec<WallPolygon>,
}

impl ContainerWalls {
    pub fn build(grid: &SamplingGrid, load: &HeightField) -> Result<Self> {
        grid.ensure_matches(load)?;

        let last_line = grid.n_lines() - 1;
        let last_target = grid.n_targets() - 1;

        let x_min = grid.x_targets[0];
        let x_max = grid.x_targets[last_target];
        let y_min = grid.y_lines[0];
        let y_max = grid.y_lines[last_line];

        // left/right run along the scan lines, back/front along the targets
        let left = side_walls(WallSide::Left, &grid.y_lines, |i| {
            let z = load.get(GridIndex::new(i, 0));
            (DVec3::new(x_min, grid.y_lines[i], 0.0), z)
        });
        let right = side_walls(WallSide::Right, &grid.y_lines, |i| {
            let z = load.get(GridIndex::new(i, last_target));
            (DVec3::new(x_max, grid.y_lines[i], 0.0), z)
        });
        let back = side_walls(WallSide::Back, &grid.x_targets, |j| {
            let z = load.get(GridIndex::new(0, j));
            (DVec3::new(grid.x_targets[j], y_min, 0.0), z)
        });
        let front = side_walls(WallSide::Front, &grid.x_targets, |j| {
            let z = load.get(GridIndex::new(last_line, j));
            (DVec3::new(grid.x_targets[j], y_max, 0.0), z)
        });

        Ok(Self {
            left,
            right,
            back,
            front,
        })
    }

    pub fn side(&self, side: WallSide) -> &[WallPolygon] {
        match side {
            WallSide::Left => &self.left,
            WallSide::Right => &self.right,
            WallSide::Back => &self.back,
            WallSide::Front => &self.front,
        }
    }

    /// Every polygon in left, right, back, front order
    pub fn all(&self) -> impl Iterator<Item = &WallPolygon> {
        WallSide::ALL.into_iter().flat_map(move |s| self.side(s).iter())
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.back.len() + self.front.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `edge(k)` gives the floor point and load height of the k-th sample along the free axis.
/// A single sample yields no quad.
fn side_walls<F>(side: WallSide, free_axis: &[f64], edge: F) -> Vec<WallPolygon>
where
    F: Fn(usize) -> (DVec3, f64),
{
    (0..free_axis.len().saturating_sub(1))
        .map(|k| {
            let (floor_start, z_start) = edge(k);
            let (floor_end, z_end) = edge(k + 1);
            WallPolygon {
                side,
                segment: k,
                vertices: [
                    floor_start,
                    floor_end,
                    floor_end.with_z(z_end),
                    floor_start.with_z(z_start),
                ],
            }
        })
        .collect()
}
