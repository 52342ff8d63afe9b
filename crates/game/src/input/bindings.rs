use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Horizontal, PlayerInput, Vertical};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<Horizontal>::new(),
          Bindings::spawn((
              Bidirectional::ad_keys(),
              Bidirectional::left_right_arrow(),
          )),
      ),
      (
          Action::<Vertical>::new(),
          Bindings::spawn((
              Bidirectional::ws_keys(),
              Bidirectional::up_down_arrow(),
          )),
      ),
  ])
}
