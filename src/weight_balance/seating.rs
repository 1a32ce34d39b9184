use crate::load_model::{AircraftConfig, PassengerData, SeatConfig};
use std::collections::{BTreeMap, HashSet};

/// Resolves the seat number every passenger will occupy.
///
/// Explicit assignments win, then seats taken at check-in. Everybody else is
/// seated heaviest first, alternating between the foremost and the aftmost
/// free seat so heavy occupants end up on both sides of the CG.
///
/// # Arguments
/// * `aircraft` - Airframe providing the seat map.
/// * `passengers` - Passengers in manifest order.
/// * `explicit` - Optional passenger id to seat number map supplied by the caller.
/// * `standard_kg` - Weight used for passengers without a scale reading.
///
/// # Returns
/// One entry per passenger, `None` when no seat is left for them.
pub(super) fn plan_seats(
    aircraft: &AircraftConfig,
    passengers: &[PassengerData],
    explicit: Option<&BTreeMap<String, String>>,
    standard_kg: f64,
) -> Vec<Option<String>> {
    let mut plan: Vec<Option<String>> = passengers
        .iter()
        .map(|p| explicit.and_then(|m| m.get(&p.id)).cloned().or_else(|| p.seat_number.clone()))
        .collect();

    let taken: HashSet<&str> = plan.iter().flatten().map(String::as_str).collect();
    let mut free: Vec<&SeatConfig> =
        aircraft.seats.iter().filter(|s| !taken.contains(s.seat_number.as_str())).collect();
    free.sort_by(|a, b| a.arm.total_cmp(&b.arm));

    let mut unseated: Vec<usize> = (0..passengers.len()).filter(|i| plan[*i].is_none()).collect();
    unseated.sort_by(|a, b| {
        let wa = passengers[*a].effective_weight(standard_kg);
        let wb = passengers[*b].effective_weight(standard_kg);
        wb.total_cmp(&wa)
    });

    let (mut front, mut back) = (0, free.len());
    let mut take_front = true;
    for idx in unseated {
        if front >= back {
            break;
        }
        let seat = if take_front {
            front += 1;
            free[front - 1]
        } else {
            back -= 1;
            free[back]
        };
        plan[idx] = Some(seat.seat_number.clone());
        take_front = !take_front;
    }
    plan
}
