use crate::base::knowledge::{KnowledgeBase, TeamMember};

const TEAM_HEADER: &str = "Our core team includes:";
const TEAM_FOOTER: &str = "Ask for any person to see a short bio.";
const SERVICES_HEADER: &str = "We operate through transdisciplinary guiding teams:";
const SERVICES_FOOTER: &str = "Ask for any area to see case studies or engagement models.";
const SUSTAINABILITY_HEADER: &str = "How we contribute to sustainability:";
const CONTACT: &str = "You can reach us via the contact form on the site. Share your name, email and a short brief, and we will schedule a call.";

fn bullets<'a>(items: impl IntoIterator<Item = &'a String>) -> impl Iterator<Item = String> {
    items.into_iter().map(|item| format!("- {item}"))
}

/// `Email: .. | Phone: ..`, skipping whatever is missing.
fn contact_details(member: &TeamMember) -> Option<String> {
    let parts: Vec<String> = [member.email.as_ref().map(|e| format!("Email: {e}")), member.phone.as_ref().map(|p| format!("Phone: {p}"))]
        .into_iter()
        .flatten()
        .collect();

    (!parts.is_empty()).then(|| parts.join(" | "))
}

fn roster_line(member: &TeamMember) -> String {
    let head = format!("- {} — {}", member.name, member.role);

    let detail = match (&member.email, &member.phone, &member.focus) {
        (Some(_), Some(_), _) => contact_details(member),
        (_, _, Some(focus)) => Some(format!("Focus: {focus}")),
        _ => contact_details(member),
    };

    match detail {
        Some(detail) => format!("{head} | {detail}"),
        None => head,
    }
}

pub(super) fn team(kb: &KnowledgeBase) -> String {
    std::iter::once(TEAM_HEADER.to_string())
        .chain(kb.team.iter().map(roster_line))
        .chain(std::iter::once(TEAM_FOOTER.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn about(kb: &KnowledgeBase) -> String {
    let values_label = match &kb.values_acronym {
        Some(acronym) => format!("Values ({acronym}): "),
        None => "Values: ".to_string(),
    };

    [format!("Mission: {}", kb.mission), format!("Vision: {}", kb.vision), values_label + &kb.values.join(", ")].join("\n")
}

pub(super) fn services(kb: &KnowledgeBase) -> String {
    std::iter::once(SERVICES_HEADER.to_string())
        .chain(bullets(&kb.services))
        .chain(std::iter::once(SERVICES_FOOTER.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn sustainability(kb: &KnowledgeBase) -> String {
    std::iter::once(SUSTAINABILITY_HEADER.to_string()).chain(bullets(&kb.sustainability)).collect::<Vec<_>>().join("\n")
}

pub(super) fn person(member: &TeamMember) -> String {
    let mut lines = vec![format!("{} — {}", member.name, member.role)];

    if let Some(bio) = &member.bio {
        lines.push(format!("Bio: {bio}"));
    } else if let Some(focus) = &member.focus {
        lines.push(format!("Focus: {focus}"));
    }

    lines.extend(contact_details(member));

    lines.join("\n")
}

pub(super) fn contact() -> String {
    CONTACT.to_string()
}

pub(super) fn fallback(kb: &KnowledgeBase) -> String {
    format!(
        "I can help with our mission, services, team and sustainability approach. Try asking: 'What services do you offer?' or 'Who is on the {} team?'",
        kb.organization
    )
}
