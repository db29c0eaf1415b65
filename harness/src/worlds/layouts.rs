//! Named maze layouts shared by tests, benches and the fixture binary.

/// One row: agent at the west end, a single food two cells east.
pub const CORRIDOR: &str = "P .\n";

/// No food at all; the start is already a goal.
pub const CLEARED: &str = "P  \n";

/// The only food sits behind a wall the agent cannot pass.
pub const WALLED_OFF: &str = "\
%%%%%%%
%P %. %
%%%%%%%
";

/// Two food pellets around a pillar.
pub const SMALL_ROOM: &str = "\
%%%%%
%P .%
% % %
%.  %
%%%%%
";

/// Ten pellets spread over dead ends.
pub const TINY_SEARCH: &str = "\
%%%%%%%%%
%..   ..%
%%%%.%% %
%   P   %
%.%% %%.%
%.%.   .%
%%%%%%%%%
";

/// Every named layout, as `(id, text)`.
pub const ALL: &[(&str, &str)] = &[
    ("corridor", CORRIDOR),
    ("cleared", CLEARED),
    ("walled_off", WALLED_OFF),
    ("small_room", SMALL_ROOM),
    ("tiny_search", TINY_SEARCH),
];

/// Look up a layout by id.
#[must_use]
pub fn by_id(id: &str) -> Option<&'static str> {
    ALL.iter().find(|(name, _)| *name == id).map(|(_, text)| *text)
}
