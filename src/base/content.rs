//! Builtin site content used when no knowledge base file is configured.

/// Default knowledge base, in the same TOML shape accepted from `KNOWLEDGE_PATH`.
pub const DEFAULT_KNOWLEDGE_BASE: &str = r#####"
organization = "iVentice"
values_acronym = "iVENTICE"

mission = "Enable sustainable growth through smart strategy, ethical governance and practical innovation."
vision = "Clean, green and impact-driven solutions accessible to every organization."

values = [
    "Innovation",
    "Value Addition",
    "Entrepreneurship",
    "Networks",
    "Transdisciplinary Approach",
    "Impactability",
    "Creativity",
    "Extensibility",
]

services = [
    "Corporate Governance",
    "Risk Management",
    "Environmental Impact & Sustainability",
    "Agriculture & Innovation",
    "Research & Socio-Economic Development",
    "Technology / Smart Solutions",
]

sustainability = [
    "Clean energy: solar and hydro integration for businesses",
    "Plastic-free initiatives and circular economy practices",
    "Carbon footprint assessments and reduction roadmaps",
    "Data-driven monitoring and reporting of impact metrics",
]

[[team]]
name = "Robert Mwangi Gaciri"
role = "Managing Consultant"
email = "robert@iventiceconsultancy.com"
phone = "+254725612230"
bio = "Project Management Professional; MA in Project Planning & Management (University of Nairobi). BA Social Sciences (BSSS, India). TIP2018 Fellow (Hebrew University of Jerusalem). Director/board member at Eshaita Capital Ltd. 20+ years across projects, consultancy, training, social and business enterprises. Managing Consultant at iVentice Consultancy Limited."

[[team]]
name = "Levi Nganga Mbugua; PhD"
role = "Research Consultant"
email = "levi@iventiceconsultancy.com"
phone = "+254721666777"
bio = "20+ years in creating, sharing, using and managing knowledge. University lecturer and researcher across social, economic, medical and financial domains. Focused on applying theory to solve real-world problems with strong ethics. Chairman & Academic Team Leader, Department of Statistics and Computing Mathematics, The Technical University of Kenya."

[[team]]
name = "Sarah Wanjiru Gachie"
role = "Agriculture and Plant Consultant"
email = "sarah@iventiceconsultancy.com"
phone = "+254717500393"
bio = "Plant Scientist specializing in Plant Pathology. Masters in Plant Science; advanced diploma in epidemiology and preventive medicine (Tel Aviv University, Israel). Exchange student at Okayama University (Japan). BSc Horticulture (JKUAT). Worked on global agricultural projects (Japan, Israel, USA, Kenya) with emphasis on climate change mitigation, SALM practices and indigenous tree planting; currently Project Research Assistant at KALRO; planning PhD in plant physiology."
"#####;
