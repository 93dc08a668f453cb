//! Single-truck packer.

use crate::interrupt::Interrupt;
use crate::search::find_best_position;
use truckload_core::catalog::{expand_instances, sort_by_area_desc, InstanceNaming};
use truckload_core::geometry::{Footprint, Rect};
use truckload_core::{
    BoxDefinition, BoxInstance, Config, Error, LayoutStats, Placement, Result, TruckLayout,
    TruckType,
};

/// Packs one truck, largest box first.
#[derive(Debug, Clone)]
pub struct TruckPacker {
    config: Config,
    interrupt: Interrupt,
}

impl TruckPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            interrupt: Interrupt::new(),
        }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Creates a packer that polls an existing interrupt.
    pub(crate) fn with_interrupt(config: Config, interrupt: Interrupt) -> Self {
        Self { config, interrupt }
    }

    /// The packing parameters.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stops any pack in progress; later packs stay stopped until [`TruckPacker::reset`].
    pub fn cancel(&self) {
        self.interrupt.cancel();
    }

    /// Clears a previous [`TruckPacker::cancel`].
    pub fn reset(&self) {
        self.interrupt.reset();
    }

    /// Lays out `instances` on `truck`.
    ///
    /// Instances are tried in descending area order (stable). A box with no
    /// valid position is skipped and only shows up in the layout's
    /// unplaced count.
    pub fn pack(&self, truck: &TruckType, instances: &[BoxInstance]) -> TruckLayout {
        let mut order: Vec<&BoxInstance> = instances.iter().collect();
        sort_by_area_desc(&mut order);

        let mut placements = Vec::with_capacity(order.len());
        let mut occupied: Vec<Rect> = Vec::with_capacity(order.len());
        let mut cancelled = false;

        for instance in order {
            if self.interrupt.is_triggered() {
                cancelled = true;
                break;
            }

            if let Some(candidate) = find_best_position(
                truck,
                instance.length(),
                instance.width(),
                &occupied,
                &self.config,
            ) {
                occupied.push(candidate.rect);
                placements.push(Placement::new(instance, candidate.rect, candidate.rotated));
            }
        }

        let mut layout = TruckLayout::new(truck, placements, instances.len());
        layout.cancelled = cancelled;
        layout
    }

    /// Single-truck arrangement of a box catalog.
    ///
    /// Every definition is expanded by quantity; instances keep the plain
    /// definition name. A missing truck or an empty catalog yields an empty
    /// arrangement and zeroed stats.
    pub fn arrange(
        &self,
        truck: Option<&TruckType>,
        boxes: &[BoxDefinition],
    ) -> Result<(Vec<Placement>, LayoutStats)> {
        let truck = match truck {
            Some(truck) if !boxes.is_empty() => truck,
            _ => return Ok((Vec::new(), LayoutStats::default())),
        };

        self.config.validate()?;
        truck.validate()?;
        truckload_core::catalog::validate_boxes(boxes)?;

        let instances = expand_instances(boxes, InstanceNaming::DefinitionName);
        let layout = self.pack(truck, &instances);
        if layout.cancelled {
            return Err(Error::Cancelled);
        }

        log::debug!(
            "arranged {}/{} boxes on '{}' ({:.1}% used)",
            layout.placed_count(),
            layout.requested,
            truck.name(),
            layout.utilization
        );

        let stats = LayoutStats::from_layout(&layout);
        Ok((layout.placements, stats))
    }
}
