use super::{compartments::CompartmentTally, result::WBResult, seating::plan_seats};
use crate::config::PlannerConfig;
use crate::event;
use crate::load_model::{
    AircraftConfig, AircraftConfigError, CargoItem, CargoPriority, Diagnostic, DiagnosticCode,
    FreightData, ItemCategory, MailData, PassengerData, WeightItem,
};
use std::collections::{BTreeMap, HashSet};

/// Everything the engine needs to weigh one load.
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest<'a> {
    pub aircraft: &'a AircraftConfig,
    /// Reported pilot weight, `None` uses the aircraft standard.
    pub pilot_weight_kg: Option<f64>,
    pub fuel_weight_kg: f64,
    pub passengers: &'a [PassengerData],
    pub freight: &'a [FreightData],
    pub mail: &'a [MailData],
    /// Passenger id to seat number, overriding automatic seating.
    pub seat_assignments: Option<&'a BTreeMap<String, String>>,
    /// Freight or mail id to compartment name, overriding automatic stowing.
    pub compartment_assignments: Option<&'a BTreeMap<String, String>>,
}

impl<'a> LoadRequest<'a> {
    /// A request without any explicit seat or compartment map.
    pub fn new(
        aircraft: &'a AircraftConfig,
        pilot_weight_kg: Option<f64>,
        fuel_weight_kg: f64,
        passengers: &'a [PassengerData],
        freight: &'a [FreightData],
        mail: &'a [MailData],
    ) -> Self {
        Self {
            aircraft,
            pilot_weight_kg,
            fuel_weight_kg,
            passengers,
            freight,
            mail,
            seat_assignments: None,
            compartment_assignments: None,
        }
    }
}

/// Stateless weight & balance calculator bound to a planner configuration.
#[derive(Debug, Clone, Copy)]
pub struct WeightBalanceEngine<'c> {
    config: &'c PlannerConfig,
}

/// Freight or mail waiting to be stowed.
struct CargoEntry<'r> {
    id: &'r str,
    category: ItemCategory,
    weight_kg: f64,
    priority: CargoPriority,
    destination: &'r str,
    requested: Option<&'r str>,
}

impl<'r> CargoEntry<'r> {
    fn from_item<T: CargoItem>(item: &'r T, explicit: Option<&'r BTreeMap<String, String>>) -> Self {
        let requested = explicit
            .and_then(|m| m.get(item.id()))
            .map(String::as_str)
            .or_else(|| item.compartment());
        Self {
            id: item.id(),
            category: item.category(),
            weight_kg: item.weight_kg(),
            priority: item.priority(),
            destination: item.destination(),
            requested,
        }
    }
}

/// Working state of one evaluation, dropped when the result is built.
struct LoadSheet<'a> {
    items: Vec<WeightItem>,
    diagnostics: Vec<Diagnostic>,
    tally: CompartmentTally<'a>,
    seat_assignments: BTreeMap<String, String>,
    compartment_assignments: BTreeMap<String, String>,
}

impl<'a> LoadSheet<'a> {
    fn new(aircraft: &'a AircraftConfig) -> Self {
        Self {
            items: Vec::new(),
            diagnostics: Vec::new(),
            tally: CompartmentTally::new(&aircraft.compartments),
            seat_assignments: BTreeMap::new(),
            compartment_assignments: BTreeMap::new(),
        }
    }

    fn stow(&mut self, idx: usize, id: &str, category: ItemCategory, weight_kg: f64, destination: &str) {
        let compartment = self.tally.config(idx);
        self.tally.add(idx, weight_kg);
        self.compartment_assignments.insert(id.to_string(), compartment.name.clone());
        self.items.push(
            WeightItem::new(id, category, weight_kg, compartment.arm)
                .in_compartment(&compartment.name)
                .bound_for(destination),
        );
    }
}

impl<'c> WeightBalanceEngine<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self { Self { config } }

    pub fn config(&self) -> &'c PlannerConfig { self.config }

    /// Computes weight, moment and CG of a load and checks it against the
    /// aircraft limits.
    ///
    /// Feasibility problems never fail the call, they show up as diagnostics
    /// in the returned [`WBResult`].
    ///
    /// # Arguments
    /// * `request` - Aircraft, fixed weights and the manifest to place.
    ///
    /// # Returns
    /// * `Ok(WBResult)` - The evaluated load sheet.
    /// * `Err(AircraftConfigError)` - The aircraft configuration is malformed.
    pub fn evaluate(&self, request: &LoadRequest<'_>) -> Result<WBResult, AircraftConfigError> {
        let aircraft = request.aircraft;
        aircraft.validate()?;

        let mut sheet = LoadSheet::new(aircraft);
        let pilot_kg = request.pilot_weight_kg.unwrap_or(aircraft.pilot_standard_weight_kg);
        sheet.items.push(WeightItem::new("empty", ItemCategory::Empty, aircraft.empty_weight_kg, aircraft.empty_arm));
        sheet.items.push(WeightItem::new("pilot", ItemCategory::Pilot, pilot_kg, aircraft.pilot_arm));
        sheet.items.push(WeightItem::new("fuel", ItemCategory::Fuel, request.fuel_weight_kg, aircraft.fuel_arm));

        self.seat_passengers(request, &mut sheet);

        let (stowed, mut loose): (Vec<CargoEntry<'_>>, Vec<CargoEntry<'_>>) = request
            .freight
            .iter()
            .map(|f| CargoEntry::from_item(f, request.compartment_assignments))
            .chain(request.mail.iter().map(|m| CargoEntry::from_item(m, request.compartment_assignments)))
            .partition(|c| c.requested.is_some());

        for entry in &stowed {
            Self::stow_requested(aircraft, entry, &mut sheet);
        }
        Self::stow_baggage(request, &mut sheet);

        loose.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.weight_kg.total_cmp(&a.weight_kg)));
        for entry in &loose {
            match sheet.tally.select(entry.weight_kg) {
                Some(idx) => sheet.stow(idx, entry.id, entry.category, entry.weight_kg, entry.destination),
                None => sheet.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::NoCompartment,
                        format!("No compartment can take {} {} ({:.1} kg)", entry.category, entry.id, entry.weight_kg),
                    )
                    .with_item(entry.id),
                ),
            }
        }

        Ok(self.finish(aircraft, sheet))
    }

    fn seat_passengers(&self, request: &LoadRequest<'_>, sheet: &mut LoadSheet<'_>) {
        let standard_kg = self.config.standard_passenger_weight_kg;
        let plan = plan_seats(request.aircraft, request.passengers, request.seat_assignments, standard_kg);
        let mut occupied: HashSet<&str> = HashSet::new();

        for (passenger, seat_number) in request.passengers.iter().zip(plan.iter()) {
            let weight_kg = passenger.effective_weight(standard_kg);
            let Some(seat_number) = seat_number else {
                sheet.diagnostics.push(
                    Diagnostic::error(DiagnosticCode::SeatNotFound, format!("No free seat for passenger {}", passenger.id))
                        .with_item(&passenger.id),
                );
                continue;
            };
            let Some(seat) = request.aircraft.seat(seat_number) else {
                sheet.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::SeatNotFound,
                        format!("Seat {seat_number} of passenger {} does not exist on {}", passenger.id, request.aircraft.id),
                    )
                    .with_item(&passenger.id),
                );
                continue;
            };
            if !occupied.insert(seat.seat_number.as_str()) {
                sheet.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::SeatConflict,
                        format!("Seat {seat_number} is already occupied, passenger {} not seated", passenger.id),
                    )
                    .with_item(&passenger.id),
                );
                continue;
            }
            if weight_kg > seat.max_weight_kg {
                sheet.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticCode::SeatOverweight,
                        format!("Passenger {} ({weight_kg:.1} kg) exceeds seat {seat_number} limit of {:.1} kg", passenger.id, seat.max_weight_kg),
                    )
                    .with_item(&passenger.id),
                );
            }
            event!("Seating {} in {seat_number} at arm {:.3}", passenger.id, seat.arm);
            sheet.seat_assignments.insert(passenger.id.clone(), seat.seat_number.clone());
            sheet.items.push(
                WeightItem::new(&passenger.id, ItemCategory::Passenger, weight_kg, seat.arm).bound_for(&passenger.destination),
            );
        }
    }

    fn stow_baggage(request: &LoadRequest<'_>, sheet: &mut LoadSheet<'_>) {
        for passenger in request.passengers.iter().filter(|p| p.baggage_weight_kg > 0.0) {
            let bag_id = format!("{}:baggage", passenger.id);
            match sheet.tally.select(passenger.baggage_weight_kg) {
                Some(idx) => {
                    sheet.stow(idx, &bag_id, ItemCategory::Baggage, passenger.baggage_weight_kg, &passenger.destination);
                }
                None => sheet.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticCode::BaggageOverflow,
                        format!("Baggage of passenger {} ({:.1} kg) does not fit any compartment", passenger.id, passenger.baggage_weight_kg),
                    )
                    .with_item(&passenger.id),
                ),
            }
        }
    }

    fn stow_requested(aircraft: &AircraftConfig, entry: &CargoEntry<'_>, sheet: &mut LoadSheet<'_>) {
        let name = entry.requested.unwrap_or_default();
        match aircraft.compartment_index(name) {
            Some(idx) => sheet.stow(idx, entry.id, entry.category, entry.weight_kg, entry.destination),
            None => sheet.diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::NoCompartment,
                    format!("Compartment {name} of {} {} does not exist on {}", entry.category, entry.id, aircraft.id),
                )
                .with_item(entry.id),
            ),
        }
    }

    /// Sums the sheet and derives the limit checks.
    fn finish(&self, aircraft: &AircraftConfig, sheet: LoadSheet<'_>) -> WBResult {
        let LoadSheet { items, mut diagnostics, tally, seat_assignments, compartment_assignments } = sheet;

        let total_weight_kg: f64 = items.iter().map(|i| i.weight_kg).sum();
        let total_moment: f64 = items.iter().map(|i| i.moment).sum();
        let cg = total_moment / total_weight_kg;

        let within_mtow = total_weight_kg <= aircraft.mtow_kg;
        if !within_mtow {
            diagnostics.push(Diagnostic::error(
                DiagnosticCode::Overweight,
                format!(
                    "Total weight {total_weight_kg:.1} kg exceeds MTOW {:.1} kg by {:.1} kg",
                    aircraft.mtow_kg,
                    total_weight_kg - aircraft.mtow_kg
                ),
            ));
        } else if total_weight_kg > aircraft.mtow_kg * self.config.near_max_ratio() {
            diagnostics.push(Diagnostic::warning(
                DiagnosticCode::NearMaxWeight,
                format!("Total weight {total_weight_kg:.1} kg is within {:.0}% of MTOW {:.1} kg", self.config.buffer_percentage, aircraft.mtow_kg),
            ));
        }

        let within_cg_envelope = aircraft.cg_min <= cg && cg <= aircraft.cg_max;
        if !within_cg_envelope {
            let direction = if cg < aircraft.cg_min { "forward" } else { "aft" };
            diagnostics.push(Diagnostic::error(
                DiagnosticCode::CgOutOfEnvelope,
                format!("CG {cg:.3} is {direction} of the envelope [{:.3}, {:.3}]", aircraft.cg_min, aircraft.cg_max),
            ));
        }

        let compartment_loads = tally.into_loads();
        for load in &compartment_loads {
            if load.load_kg > load.capacity_kg {
                diagnostics.push(Diagnostic::error(
                    DiagnosticCode::CompartmentOverflow,
                    format!("Compartment {} holds {:.1} kg, capacity {:.1} kg", load.name, load.load_kg, load.capacity_kg),
                ));
            } else if load.load_kg > load.capacity_kg * self.config.compartment_near_full_ratio {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticCode::CompartmentNearFull,
                    format!("Compartment {} is nearly full ({:.1}/{:.1} kg)", load.name, load.load_kg, load.capacity_kg),
                ));
            }
        }

        let is_valid = within_mtow && within_cg_envelope && !diagnostics.iter().any(Diagnostic::is_error);
        WBResult {
            total_weight_kg,
            total_moment,
            cg,
            within_mtow,
            within_cg_envelope,
            is_valid,
            weight_margin_kg: aircraft.mtow_kg - total_weight_kg,
            cg_margin_forward: cg - aircraft.cg_min,
            cg_margin_aft: aircraft.cg_max - cg,
            compartment_loads,
            items,
            seat_assignments,
            compartment_assignments,
            diagnostics,
        }
    }
}
