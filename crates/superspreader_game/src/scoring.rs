use crate::entities::Virus;
use crate::grid::Position;

/// Remove every virus sitting on `player_pos` and return how many were
/// collected.
///
/// The scan and the removal are separate passes: matches are counted
/// first, then the collection is filtered in one batch, so the list is
/// never mutated while it is being walked. Several viruses stacked on
/// the player's tile are all collected in the same call.
pub fn collect(player_pos: Position, viruses: &mut Vec<Virus>) -> u32 {
    let matched = viruses.iter().filter(|v| v.pos() == player_pos).count() as u32;
    if matched > 0 {
        viruses.retain(|v| v.pos() != player_pos);
    }
    matched
}
