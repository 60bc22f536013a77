//! Legal move generation.
//!
//! `legal_moves` enumerates every move a player may make from the current
//! state. It is pure: nothing in the state changes, so it is safe to call for
//! any player at any time (the outcome evaluator does exactly that).
//!
//! ## Rules
//!
//! - A destination is blocked if another tracker stands on it. The fugitive
//!   never blocks anything: trackers do not know where it is.
//! - Single moves spend the ticket matching the edge's transport. The
//!   fugitive may also spend a secret ticket on any edge.
//! - The fugitive may chain two moves with a double ticket, provided both
//!   legs fall inside the round schedule.
//! - A player with no other move is offered exactly `{Pass}`.

use crate::core::{Colour, GameState, Location, Move, MoveSet, Ticket, TicketMove, Tickets};
use crate::graph::{Edge, Graph};

/// Enumerate every legal move for `colour`.
///
/// Never returns an empty set. A colour not seated in the game is offered
/// only a pass.
pub fn legal_moves<G: Graph + ?Sized>(state: &GameState, graph: &G, colour: Colour) -> MoveSet {
    let mut moves = MoveSet::new();

    let Some(player) = state.player(colour) else {
        moves.insert(Move::Pass(colour));
        return moves;
    };

    let tickets = player.tickets();
    let fugitive = player.is_fugitive();

    for edge in open_edges(state, graph, player.location(), colour) {
        let ticket = Ticket::from_transport(edge.transport);
        if tickets.has(ticket, 1) {
            moves.insert(Move::ticket(colour, ticket, edge.destination));
        }
        if fugitive && tickets.has(Ticket::Secret, 1) {
            moves.insert(Move::ticket(colour, Ticket::Secret, edge.destination));
        }
    }

    if fugitive && tickets.has(Ticket::Double, 1) && double_fits_schedule(state) {
        add_double_moves(state, graph, colour, player.location(), tickets, &mut moves);
    }

    if moves.is_empty() {
        moves.insert(Move::Pass(colour));
    }

    moves
}

/// Both legs of a double move must be played in scheduled rounds.
fn double_fits_schedule(state: &GameState) -> bool {
    state.round() + 2 <= state.schedule().len()
}

/// Edges out of `from` whose destination no other tracker occupies.
fn open_edges<'g, G: Graph + ?Sized>(
    state: &'g GameState,
    graph: &'g G,
    from: Location,
    mover: Colour,
) -> impl Iterator<Item = &'g Edge> + 'g {
    graph
        .edges_from(from)
        .iter()
        .filter(move |edge| !state.tracker_at(edge.destination, mover))
}

/// Expand every affordable ticket combination over every open two-leg path.
fn add_double_moves<G: Graph + ?Sized>(
    state: &GameState,
    graph: &G,
    colour: Colour,
    from: Location,
    tickets: &Tickets,
    moves: &mut MoveSet,
) {
    for first in open_edges(state, graph, from, colour) {
        let first_ticket = Ticket::from_transport(first.transport);

        for second in open_edges(state, graph, first.destination, colour) {
            let second_ticket = Ticket::from_transport(second.transport);

            let combinations = [
                (first_ticket, Ticket::Secret),
                (Ticket::Secret, second_ticket),
                (Ticket::Secret, Ticket::Secret),
                (first_ticket, second_ticket),
            ];

            for (t1, t2) in combinations {
                if can_afford(tickets, t1, t2) {
                    moves.insert(Move::double(
                        colour,
                        TicketMove::new(colour, t1, first.destination),
                        TicketMove::new(colour, t2, second.destination),
                    ));
                }
            }
        }
    }
}

/// Check the inventory covers both legs, counting a repeated kind twice.
fn can_afford(tickets: &Tickets, first: Ticket, second: Ticket) -> bool {
    if first == second {
        tickets.has(first, 2)
    } else {
        tickets.has(first, 1) && tickets.has(second, 1)
    }
}
