use crate::{
    beatmap::Color4,
    parse::{HitObject, HitObjectFlags},
};

/// State threaded through the single forward pass that stamps combo and
/// color indices onto hit objects.
///
/// The pass is order-dependent: each decision depends on the previous
/// object, so it must run strictly in source-line order.
pub(crate) struct ComboState {
    color_index: usize,
    combo_index: u32,
    previous_was_spinner: bool,
    first: bool,
}

impl ComboState {
    pub(crate) fn new() -> Self {
        Self {
            color_index: 0,
            combo_index: 0,
            previous_was_spinner: false,
            first: true,
        }
    }

    /// Stamp one object. `palette` must not be empty.
    pub(crate) fn assign(&mut self, object: &mut HitObject, palette: &[Color4]) {
        let is_spinner = object.is_spinner();

        if object.new_combo() || self.first || self.previous_was_spinner {
            // chosen starts always carry the marker, even without one in the source
            object.flags |= HitObjectFlags::NEW_COMBO;

            let mut color_increment = object.combo_offset as usize;

            if !is_spinner {
                color_increment += 1;
            }

            self.color_index = (self.color_index + color_increment) % palette.len();
            self.combo_index = 1;
        } else {
            self.combo_index += 1;
        }

        object.combo_index = self.combo_index;
        object.color_index = self.color_index;
        object.color = palette[self.color_index];

        self.previous_was_spinner = is_spinner;
        self.first = false;
    }
}
