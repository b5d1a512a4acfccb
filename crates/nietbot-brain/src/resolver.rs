//! Answer rendering: intent + raw question → text from the handbook.

use std::sync::Arc;

use nietbot_core::{Answer, IntentLabel};
use nietbot_knowledge::Handbook;

/// Returned when no branch has anything to say.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find any information related to that question. \
    Try asking about fees, Wi-Fi, admission, clubs, or hostel.";

pub const FEES_CLARIFY: &str =
    "Could you please specify which fees you want details about? (Academic / Bus / Hostel)";

pub const FEE_OPTIONS: [&str; 3] = ["Academic fees", "Bus fees", "Hostel fees"];

const ACADEMIC_WORDS: [&str; 4] = ["academic", "tuition", "course", "btech"];
const BUS_WORDS: [&str; 4] = ["bus", "transport", "route", "conveyance"];

/// Renders answers from a shared, read-only handbook.
#[derive(Clone)]
pub struct AnswerResolver {
    handbook: Arc<Handbook>,
    institution: String,
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `168000` → `168,000`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl AnswerResolver {
    pub fn new(handbook: Arc<Handbook>, institution: impl Into<String>) -> Self {
        Self {
            handbook,
            institution: institution.into(),
        }
    }

    /// Answer text for `intent`. `query` is the user's question, already lowercased.
    pub fn resolve(&self, intent: IntentLabel, query: &str) -> String {
        self.resolve_answer(intent, query).text
    }

    /// Like [`resolve`](Self::resolve) for a raw label token; unknown tokens get the fallback.
    pub fn resolve_token(&self, token: &str, query: &str) -> String {
        self.resolve(IntentLabel::from_token_lossy(token), query)
    }

    pub fn resolve_answer(&self, intent: IntentLabel, query: &str) -> Answer {
        let hb = &*self.handbook;
        match intent {
            IntentLabel::FeesQuery => self.fees(query),
            IntentLabel::AdmissionQuery => Answer::text(format!(
                "Undergraduate Admission Process:\n{}",
                bullets(&hb.admission_information.undergraduate.rules)
            )),
            IntentLabel::InfrastructureQuery => Answer::text(self.infrastructure(query)),
            IntentLabel::ScholarshipQuery => {
                let links = &hb.scholarships.links;
                Answer::text(format!(
                    "Scholarship Information:\n\
                     - UP Government Scholarship: {}\n\
                     - National Scholarship Portal: {}\n\
                     Institute verifies documents before forwarding them to authorities.",
                    links.state_portal, links.national_portal
                ))
            }
            IntentLabel::StudentWelfareQuery => {
                let welfare = &hb.student_welfare;
                Answer::text(format!(
                    "Student Welfare & Development Programs:\n{}\n\nFor grievances, contact SGRC at {}",
                    bullets(&welfare.schemes),
                    welfare.grievance_cells.student_cell.email
                ))
            }
            IntentLabel::InnovationQuery => {
                let cell = &hb.innovation_cell;
                Answer::text(format!(
                    "Innovation Council (IIC)\n{}\n\nActivities include: {}",
                    cell.description,
                    cell.activities.join(", ")
                ))
            }
            IntentLabel::PlacementQuery => Answer::text(format!(
                "Placement & CMC Rules:\n{}",
                bullets(&hb.career_management_cell.rules)
            )),
            IntentLabel::ClubQuery => {
                let clubs = &hb.clubs_and_activities;
                Answer::text(format!(
                    "Student Clubs & Societies:\n\
                     Technical: {}\n\
                     Cultural: {}\n\
                     Social: {}\n\
                     Hobby: {}",
                    clubs.technical_clubs.join(", "),
                    clubs.cultural_clubs.join(", "),
                    clubs.social_clubs.join(", "),
                    clubs.hobby_clubs.join(", ")
                ))
            }
            IntentLabel::HostelQuery => Answer::text(format!(
                "Hostel Rules:\n{}",
                bullets(&hb.rules_regulations.hostel)
            )),
            IntentLabel::ContactQuery => {
                let lines: Vec<String> = hb
                    .important_contacts
                    .iter()
                    .map(|c| format!("{}: {} ({})", c.role, c.name, c.phone))
                    .collect();
                Answer::text(format!("Important Contacts:\n{}", lines.join("\n")))
            }
            IntentLabel::RulesQuery | IntentLabel::CodeOfConductQuery => Answer::text(format!(
                "Campus Discipline Rules:\n{}",
                bullets(&hb.rules_regulations.campus)
            )),
            IntentLabel::GeneralQuery => Answer::text(FALLBACK_ANSWER),
        }
    }

    fn fees(&self, query: &str) -> Answer {
        let fees = &self.handbook.fee_structure;

        if contains_any(query, &ACADEMIC_WORDS) {
            let btech = &fees.btech;
            Answer::text(format!(
                "Academic Fees (B.Tech)\n\
                 Total First Year Fee: ₹{}\n\
                 Discount (One-time payment): ₹{}\n\
                 This includes tuition, exam, welfare, and departmental fees.",
                group_thousands(btech.total_first_year),
                group_thousands(btech.discounted_total)
            ))
        } else if contains_any(query, &BUS_WORDS) {
            let bus = &fees.bus_fee;
            Answer::text(format!(
                "Bus Fees per year:\n\
                 • Ghaziabad/Delhi: ₹{}\n\
                 • Noida: ₹{}\n\
                 • Bulandshahr: ₹{}\n\
                 • Sikandrabad: ₹{}",
                bus.ghaziabad_delhi, bus.noida, bus.bulandshahr, bus.sikandrabad
            ))
        } else if query.contains("hostel") {
            let hostel = &fees.hostel_fee;
            Answer::text(format!(
                "Hostel Fees: ₹{} per annum (includes {}).",
                hostel.range,
                hostel.includes.join(", ")
            ))
        } else {
            Answer::with_options(FEES_CLARIFY, &FEE_OPTIONS)
        }
    }

    fn infrastructure(&self, query: &str) -> String {
        let infra = &self.handbook.infrastructure;
        let name = &self.institution;

        if query.contains("wifi") || query.contains("wi-fi") || query.contains("internet") {
            format!(
                "Yes, {name} campus is fully Wi-Fi enabled with high-speed internet access \
                 in all academic blocks, hostels, and labs."
            )
        } else if query.contains("library") {
            let lib = &infra.library;
            format!(
                "Library Info:\n\
                 Timings: {}\n\
                 Book Limit: UG: {} | PG: {} | Faculty: {}\n\
                 Fine for delay: ₹{} per day.",
                lib.timings,
                lib.book_limit.ug,
                lib.book_limit.pg,
                lib.book_limit.faculty,
                lib.fine_per_day
            )
        } else if query.contains("gym") {
            format!("Yes, {name} has a modern gymnasium facility available to students (₹600/month).")
        } else if query.contains("sports") {
            format!(
                "{name} offers Cricket, Football, Basketball, Badminton, Chess, Yoga, and Carrom facilities."
            )
        } else {
            format!(
                "Campus Infrastructure Highlights:\n\
                 - {}\n\
                 - Library, Gym, Dining Hall, Wi-Fi, Cafeteria, Union Bank & ATM available.",
                infra.campus
            )
        }
    }
}
