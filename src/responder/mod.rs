//! Rule-based FAQ responder.
//!
//! A question is lowercased and tested against an ordered list of category
//! rules. The first rule that fires produces the answer; when none fires the
//! fallback text is returned. Matching is plain substring containment.

mod render;

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::base::knowledge::{KnowledgeBase, TeamMember};

/// Categories the responder can answer, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Team,
    About,
    Services,
    Sustainability,
    Person,
    Contact,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Team => "team",
            Category::About => "about",
            Category::Services => "services",
            Category::Sustainability => "sustainability",
            Category::Person => "person",
            Category::Contact => "contact",
        };

        f.write_str(name)
    }
}

/// Categories answered from a keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Team,
    About,
    Services,
    Sustainability,
    Contact,
}

impl From<Topic> for Category {
    fn from(topic: Topic) -> Self {
        match topic {
            Topic::Team => Category::Team,
            Topic::About => Category::About,
            Topic::Services => Category::Services,
            Topic::Sustainability => Category::Sustainability,
            Topic::Contact => Category::Contact,
        }
    }
}

/// A single category rule.
#[derive(Debug, Clone)]
enum Rule {
    /// Any of the (lowercased) keywords is a substring of the question.
    AnyKeyword(Topic, Vec<String>),
    /// Any whitespace-separated token of a team member's name is a substring of the question.
    MemberName,
}

/// The outcome of evaluating a rule against a question.
enum Hit<'a> {
    Topic(Topic),
    Member(&'a TeamMember),
}

impl Rule {
    fn keywords(topic: Topic, keywords: &[String]) -> Self {
        Rule::AnyKeyword(topic, keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    fn evaluate<'a>(&self, knowledge: &'a KnowledgeBase, question: &str) -> Option<Hit<'a>> {
        match self {
            Rule::AnyKeyword(topic, keywords) => keywords.iter().any(|k| question.contains(k.as_str())).then_some(Hit::Topic(*topic)),
            Rule::MemberName => knowledge
                .team
                .iter()
                .find(|member| member.name.split_whitespace().any(|part| question.contains(part.to_lowercase().as_str())))
                .map(Hit::Member),
        }
    }
}

/// Answers questions from a [`KnowledgeBase`].
///
/// This is trivially cloneable; clones share the same knowledge base.
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge: Arc<KnowledgeBase>,
    rules: Arc<Vec<Rule>>,
}

impl Responder {
    /// Builds the ordered rule list for the given knowledge base.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let keywords = &knowledge.keywords;

        let mut about = keywords.about.clone();
        about.push(knowledge.organization.clone());

        let rules = vec![
            Rule::keywords(Topic::Team, &keywords.team),
            Rule::keywords(Topic::About, &about),
            Rule::keywords(Topic::Services, &keywords.services),
            Rule::keywords(Topic::Sustainability, &keywords.sustainability),
            Rule::MemberName,
            Rule::keywords(Topic::Contact, &keywords.contact),
        ];

        Self {
            knowledge,
            rules: Arc::new(rules),
        }
    }

    /// The knowledge base this responder answers from.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Returns the category that would answer `question`, or `None` for the fallback.
    pub fn classify(&self, question: &str) -> Option<Category> {
        let normalized = question.to_lowercase();

        self.first_hit(&normalized).map(|hit| match hit {
            Hit::Topic(topic) => topic.into(),
            Hit::Member(_) => Category::Person,
        })
    }

    /// Answers `question`. Never fails.
    #[instrument(skip_all)]
    pub fn answer(&self, question: &str) -> String {
        let normalized = question.to_lowercase();
        let kb = self.knowledge.as_ref();

        match self.first_hit(&normalized) {
            Some(Hit::Topic(topic)) => {
                debug!("Answering from the `{}` category.", Category::from(topic));

                match topic {
                    Topic::Team => render::team(kb),
                    Topic::About => render::about(kb),
                    Topic::Services => render::services(kb),
                    Topic::Sustainability => render::sustainability(kb),
                    Topic::Contact => render::contact(),
                }
            }
            Some(Hit::Member(member)) => {
                debug!("Answering with the profile of `{}`.", member.name);
                render::person(member)
            }
            None => {
                debug!("No category matched; using the fallback.");
                render::fallback(kb)
            }
        }
    }

    fn first_hit(&self, normalized: &str) -> Option<Hit<'_>> {
        self.rules.iter().find_map(|rule| rule.evaluate(&self.knowledge, normalized))
    }
}
