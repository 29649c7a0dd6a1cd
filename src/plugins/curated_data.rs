//! Hand-authored content for the curated backbone.
//!
//! Table position is sibling order. Titles are unique per parent.

use crate::core::model::NodeCategory::{self, *};

pub struct LawDef {
    pub title: &'static str,
    pub description: &'static str,
    pub derived_from: &'static [&'static str],
    pub statement: &'static str,
    pub recursive_behavior: &'static str,
    pub violation_outcome: &'static str,
    pub why_this_law_persists: &'static str,
}

pub struct ModifierDef {
    pub modifier_type: &'static str,
    pub calculation_basis: &'static [&'static str],
    pub application_rules: &'static [(&'static str, &'static str)],
}

pub struct PrincipleDef {
    pub title: &'static str,
    pub description: &'static str,
    pub category: NodeCategory,
    pub aligned_with: &'static [&'static str],
    pub principle: &'static str,
    pub why_it_works: &'static str,
    pub violation_pattern: &'static str,
    pub predictable_result: &'static str,
    pub modifier: Option<ModifierDef>,
}

pub struct FrameworkDef {
    pub title: &'static str,
    pub description: &'static str,
    pub based_on: &'static [&'static str],
    pub purpose: &'static str,
    pub structure: &'static str,
    pub when_to_use: &'static str,
    pub when_not_to_use: &'static str,
}

/// A plain curated entry with optional nested entries.
pub struct EntryDef {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Option<NodeCategory>,
    pub children: &'static [EntryDef],
}

const fn entry(title: &'static str, description: &'static str) -> EntryDef {
    EntryDef {
        title,
        description,
        category: None,
        children: &[],
    }
}

const fn entry_in(
    title: &'static str,
    description: &'static str,
    category: NodeCategory,
) -> EntryDef {
    EntryDef {
        title,
        description,
        category: Some(category),
        children: &[],
    }
}

const fn branch(
    title: &'static str,
    description: &'static str,
    children: &'static [EntryDef],
) -> EntryDef {
    EntryDef {
        title,
        description,
        category: None,
        children,
    }
}

const fn branch_in(
    title: &'static str,
    description: &'static str,
    category: NodeCategory,
    children: &'static [EntryDef],
) -> EntryDef {
    EntryDef {
        title,
        description,
        category: Some(category),
        children,
    }
}

pub struct EngineDef {
    pub title: &'static str,
    pub description: &'static str,
    pub engine_type: &'static str,
}

pub struct SystemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mantra: &'static str,
    pub route: &'static str,
    pub order_index: i64,
    pub sub_systems: &'static [(&'static str, &'static str)],
}

pub struct TierDef {
    pub name: &'static str,
    pub order_index: i64,
    pub systems: &'static [SystemDef],
}

// ---------------------------------------------------------------------------
// CONSTRAINTS_OF_REALITY
// ---------------------------------------------------------------------------

pub const FUNDAMENTAL_LAWS: &[LawDef] = &[
    LawDef {
        title: "LAW_OF_COMPOUNDING",
        description: "Effects multiply over time. Small consistent actions lead to exponential results.",
        derived_from: &["Constraints of Reality"],
        statement: "Effects multiply over time. Small consistent actions lead to exponential results.",
        recursive_behavior: "Each compounding cycle amplifies the previous cycle, creating accelerating returns that become increasingly difficult to reverse.",
        violation_outcome: "Systems that ignore compounding fail to account for exponential growth or decay, leading to catastrophic underestimation of long-term outcomes.",
        why_this_law_persists: "Time is unidirectional and effects accumulate. The mathematical nature of compounding is independent of human awareness or intention.",
    },
    LawDef {
        title: "LAW_OF_ENTROPY",
        description: "Systems tend toward disorder without energy input. Maintenance is required.",
        derived_from: &["Constraints of Reality"],
        statement: "Systems tend toward disorder without energy input. Maintenance is required.",
        recursive_behavior: "Disorder begets more disorder. Without intervention, systems degrade at an accelerating rate until they reach maximum entropy.",
        violation_outcome: "Systems that ignore entropy experience progressive decay, eventual collapse, and loss of function without warning.",
        why_this_law_persists: "Energy distribution naturally moves toward equilibrium. This is a thermodynamic fact that applies to all systems, regardless of domain.",
    },
    LawDef {
        title: "LAW_OF_TIME",
        description: "Time flows in one direction. Opportunity cost is real and irreversible.",
        derived_from: &["Constraints of Reality"],
        statement: "Time flows in one direction. Opportunity cost is real and irreversible.",
        recursive_behavior: "Each moment forecloses alternatives. The cost of time spent compounds as future options diminish.",
        violation_outcome: "Systems that ignore time constraints accumulate opportunity costs, miss windows of action, and face irreversible consequences.",
        why_this_law_persists: "Time is a fundamental dimension of reality. Its unidirectional nature is not a human construct but a physical constraint.",
    },
    LawDef {
        title: "LAW_OF_ENERGY",
        description: "Energy is conserved and transformed. All actions require energy expenditure.",
        derived_from: &["Constraints of Reality"],
        statement: "Energy is conserved and transformed. All actions require energy expenditure.",
        recursive_behavior: "Energy spent cannot be recovered. Each action depletes available energy, reducing capacity for future actions.",
        violation_outcome: "Systems that ignore energy constraints exhaust themselves, experience burnout, and fail to sustain operations.",
        why_this_law_persists: "Energy conservation is a fundamental physical law. All processes, including cognitive and social ones, require energy transformation.",
    },
    LawDef {
        title: "LAW_OF_CAUSE_EFFECT",
        description: "Every effect has a cause. Actions have consequences, both intended and unintended.",
        derived_from: &["Constraints of Reality"],
        statement: "Every effect has a cause. Actions have consequences, both intended and unintended.",
        recursive_behavior: "Effects become causes for subsequent effects, creating chains of consequences that propagate through systems.",
        violation_outcome: "Systems that ignore cause-effect relationships experience unexpected consequences, cascading failures, and loss of predictability.",
        why_this_law_persists: "Causality is a fundamental structure of reality. The relationship between actions and outcomes exists independently of observation.",
    },
];

pub const STRATEGIC_PRINCIPLES: &[PrincipleDef] = &[
    PrincipleDef {
        title: "LEVERAGE",
        description: "Use leverage to amplify results. Find ways to multiply your efforts.",
        category: Strategic,
        aligned_with: &["Law of Energy", "Law of Compounding"],
        principle: "Seek mechanisms that multiply the impact of each unit of energy expended.",
        why_it_works: "Aligning with energy conservation and compounding allows limited resources to produce disproportionate outcomes over time.",
        violation_pattern: "Direct effort applied without leverage mechanisms, treating all actions as equal in impact.",
        predictable_result: "Linear returns that fail to scale, eventual exhaustion from inefficient energy use, and inability to compete with leveraged systems.",
        modifier: None,
    },
    PrincipleDef {
        title: "MARGIN_OF_SAFETY",
        description: "Build buffers and safety margins. Prepare for uncertainty and volatility.",
        category: Strategic,
        aligned_with: &["Law of Entropy", "Law of Cause and Effect"],
        principle: "Maintain reserves and buffers that exceed minimum requirements to absorb unexpected disruptions.",
        why_it_works: "Entropy guarantees unexpected events. Cause-effect chains produce unforeseen consequences. Buffers provide resilience against both.",
        violation_pattern: "Operating at maximum capacity with no reserves, assuming predictable conditions, ignoring edge cases.",
        predictable_result: "System failure when unexpected events occur, cascading breakdowns from single points of failure, inability to recover from disruptions.",
        modifier: None,
    },
    PrincipleDef {
        title: "INVERSION",
        description: "Think backwards. Avoid failure by understanding what not to do.",
        category: Strategic,
        aligned_with: &["Law of Cause and Effect"],
        principle: "Identify and avoid actions that guarantee failure before optimizing for success.",
        why_it_works: "Cause-effect relationships work in reverse. Avoiding negative causes prevents negative effects more reliably than pursuing positive causes guarantees positive effects.",
        violation_pattern: "Focusing only on what to do, ignoring failure modes, assuming success is the default outcome.",
        predictable_result: "Repeated failures from preventable causes, inability to learn from mistakes, optimization of the wrong variables.",
        modifier: None,
    },
    PrincipleDef {
        title: "OPPORTUNITY_COST",
        description: "Every choice has a cost. The best alternative forgone is the real cost.",
        category: Strategic,
        aligned_with: &["Law of Time", "Law of Energy"],
        principle: "Evaluate decisions by comparing against the best alternative use of the same time and energy.",
        why_it_works: "Time and energy are finite. Choosing one action precludes others. The value of the best alternative is the true cost of any decision.",
        violation_pattern: "Evaluating choices in isolation, ignoring alternatives, treating sunk costs as relevant, focusing only on direct costs.",
        predictable_result: "Suboptimal resource allocation, accumulation of opportunity costs, failure to maximize value from limited resources.",
        modifier: None,
    },
    PrincipleDef {
        title: "SYSTEMS_THINKING",
        description: "Understand interconnections and feedback loops. See the whole system.",
        category: Strategic,
        aligned_with: &["Law of Cause and Effect", "Law of Energy"],
        principle: "Analyze systems by mapping relationships, feedback loops, and energy flows rather than isolated components.",
        why_it_works: "Cause-effect chains create interconnected systems. Energy flows through these connections. Understanding the system reveals leverage points and unintended consequences.",
        violation_pattern: "Optimizing individual components in isolation, ignoring feedback loops, treating systems as linear and independent.",
        predictable_result: "Local optimizations that degrade system performance, unexpected side effects from interventions, inability to predict system behavior.",
        modifier: None,
    },
];

pub const SYSTEMIC_PRINCIPLES: &[PrincipleDef] = &[
    PrincipleDef {
        title: "FIRST_PRINCIPLES",
        description: "Break down complex problems to fundamental truths. Build from the ground up.",
        category: Systemic,
        aligned_with: &["Law of Cause and Effect"],
        principle: "Reason from fundamental truths rather than analogies or assumptions.",
        why_it_works: "Cause-effect relationships trace to fundamental causes. Building from first principles ensures solutions address root causes rather than symptoms.",
        violation_pattern: "Reasoning by analogy, accepting assumptions without verification, building on inherited beliefs.",
        predictable_result: "Solutions that address symptoms not causes, inability to innovate beyond existing patterns, accumulation of flawed assumptions.",
        modifier: None,
    },
    PrincipleDef {
        title: "FEEDBACK_LOOPS",
        description: "Systems respond to feedback. Positive and negative loops drive behavior.",
        category: Systemic,
        aligned_with: &["Law of Cause and Effect", "Law of Energy"],
        principle: "Design systems with feedback mechanisms that adjust behavior based on outcomes.",
        why_it_works: "Cause-effect chains create feedback. Energy flows through these loops. Systems without feedback cannot adapt or self-correct.",
        violation_pattern: "Linear thinking without loops, ignoring system responses to interventions, designing open-loop systems.",
        predictable_result: "Systems that cannot self-correct, accumulation of errors, inability to adapt to changing conditions.",
        modifier: None,
    },
    PrincipleDef {
        title: "EMERGENCE",
        description: "Complex behaviors emerge from simple rules. The whole is greater than the sum.",
        category: Systemic,
        aligned_with: &["Law of Cause and Effect", "Law of Compounding"],
        principle: "Recognize that system-level properties emerge from component interactions, not component properties alone.",
        why_it_works: "Cause-effect interactions between components compound into system behaviors. The system exhibits properties that components alone do not possess.",
        violation_pattern: "Reductionist thinking that ignores interactions, assuming system behavior equals sum of parts, optimizing components in isolation.",
        predictable_result: "Failure to predict system behavior, inability to design complex systems, missing emergent opportunities and risks.",
        modifier: None,
    },
    PrincipleDef {
        title: "ADAPTATION",
        description: "Systems adapt to survive. Flexibility and resilience are key.",
        category: Systemic,
        aligned_with: &["Law of Entropy", "Law of Energy"],
        principle: "Design systems with capacity to change structure and behavior in response to environmental pressures.",
        why_it_works: "Entropy creates changing conditions. Energy constraints shift. Systems that cannot adapt exhaust energy fighting entropy and fail.",
        violation_pattern: "Rigid systems that resist change, optimizing for static conditions, assuming stability is permanent.",
        predictable_result: "Systems that become obsolete, inability to respond to change, eventual failure when conditions shift.",
        modifier: None,
    },
    PrincipleDef {
        title: "HIERARCHY",
        description: "Systems organize in hierarchies. Levels of abstraction enable complexity.",
        category: Systemic,
        aligned_with: &["Law of Cause and Effect"],
        principle: "Structure systems in hierarchical layers where higher levels abstract and coordinate lower levels.",
        why_it_works: "Cause-effect relationships organize naturally into hierarchies. Abstraction reduces complexity while maintaining control. Hierarchies enable scaling.",
        violation_pattern: "Flat structures that ignore levels, mixing abstraction levels, treating all components as equal.",
        predictable_result: "Complexity overload, inability to scale, loss of control, inefficient coordination.",
        modifier: None,
    },
];

/// Principles that double as global modifiers across systems.
pub const CROSS_SYSTEM_PRINCIPLES: &[PrincipleDef] = &[
    PrincipleDef {
        title: "TRUST",
        description: "Trust is a forward-looking belief built on competence, reliability, and alignment. Acts as a global modifier affecting all systems.",
        category: CrossSystem,
        aligned_with: &["Law of Cause and Effect", "Law of Compounding"],
        principle: "Build trust through consistent demonstration of competence, reliability, and alignment. Trust acts as a global modifier reducing costs and unlocking opportunities across all systems.",
        why_it_works: "Trust compounds slowly but decays quickly. High trust reduces verification costs, friction, and unlocks opportunities. Low trust increases costs and restricts access across all systems.",
        violation_pattern: "Inconsistent behavior, breaking commitments, acting against shared interests, demonstrating incompetence repeatedly.",
        predictable_result: "Increased costs across all systems, restricted opportunities, higher verification requirements, reduced optionality, and system-wide friction.",
        modifier: Some(ModifierDef {
            modifier_type: "GLOBAL",
            calculation_basis: &["Competence Score", "Reliability Score", "Alignment Score"],
            application_rules: &[
                (
                    "costMultiplier",
                    "(1 - trust/100) for high trust, (1 + (100-trust)/100) for low trust",
                ),
                ("opportunityUnlocker", "Unlock when trust > threshold"),
                ("frictionReducer", "Reduce verification at high trust levels"),
            ],
        }),
    },
    PrincipleDef {
        title: "REPUTATION",
        description: "Reputation is not what people think of you. It is what they expect from you. A forward-looking expectation governing access.",
        category: CrossSystem,
        aligned_with: &["Law of Compounding", "Law of Cause and Effect"],
        principle: "Reputation compounds like interest - slow to build, fast to destroy. Every interaction is a micro-deposit or withdrawal.",
        why_it_works: "Reputation governs access to opportunities, partnerships, and resources. High reputation opens doors; low reputation closes them across all systems.",
        violation_pattern: "Inconsistent outcomes, failing to meet expectations, negative public actions, breaking trust repeatedly.",
        predictable_result: "Doors close, opportunities disappear, partnerships dissolve, restricted access to resources across all systems.",
        modifier: Some(ModifierDef {
            modifier_type: "ACCESS",
            calculation_basis: &[],
            application_rules: &[],
        }),
    },
    PrincipleDef {
        title: "OPTIONALITY",
        description: "Optionality is the right, but not the obligation, to act. Strategic freedom across all systems.",
        category: CrossSystem,
        aligned_with: &["Law of Time", "Law of Energy"],
        principle: "Maintain optionality by preserving resources and choices. High optionality unlocks higher-risk, higher-reward actions.",
        why_it_works: "Time and energy are finite. Optionality decays when resources are idle. High optionality enables asymmetric risk-reward opportunities.",
        violation_pattern: "Committing all resources early, eliminating choices, ignoring opportunity costs, using resources inefficiently.",
        predictable_result: "Restricted actions, limited choices, forced paths, inability to respond to better opportunities, reduced strategic freedom.",
        modifier: Some(ModifierDef {
            modifier_type: "FREEDOM",
            calculation_basis: &[],
            application_rules: &[],
        }),
    },
    PrincipleDef {
        title: "ENERGY_RESERVE",
        description: "Reserve energy enables sustained effort when needed. Stored capacity beyond daily budget.",
        category: CrossSystem,
        aligned_with: &["Law of Energy", "Law of Entropy"],
        principle: "Build energy reserve through consistent energy management. Reserve enables cross-system sustained efforts during critical periods.",
        why_it_works: "Daily energy is insufficient for critical periods. Reserve enables sustained effort across multiple days and systems when needed.",
        violation_pattern: "Operating at maximum capacity, no reserve buffer, poor energy management, exhausting all energy daily.",
        predictable_result: "Forced to stop when daily energy depleted, cannot sustain critical efforts, inability to handle emergencies, loss of momentum.",
        modifier: Some(ModifierDef {
            modifier_type: "CAPACITY",
            calculation_basis: &[],
            application_rules: &[],
        }),
    },
];

pub const FRAMEWORKS: &[FrameworkDef] = &[
    FrameworkDef {
        title: "PARETO_PRINCIPLE",
        description: "80/20 rule. Focus on the vital few that produce most results.",
        based_on: &["Leverage", "Opportunity Cost"],
        purpose: "Identify the minority of inputs that produce the majority of outputs to optimize resource allocation.",
        structure: "1. Identify all inputs. 2. Measure outputs for each input. 3. Rank inputs by output. 4. Focus on top 20% that produce 80% of results.",
        when_to_use: "When resources are limited, when outputs are measurable, when input-output relationships are unequal.",
        when_not_to_use: "When all inputs are equally critical, when outputs cannot be measured, when the 80/20 distribution does not apply.",
    },
    FrameworkDef {
        title: "DOMAIN_APPLICATION_FRAMEWORK",
        description: "Apply universal principles across specific domains (Money, Career, Relationships).",
        based_on: &["Systems Thinking", "First Principles"],
        purpose: "Translate universal principles into domain-specific actions by identifying domain constraints and opportunities.",
        structure: "1. Identify the principle. 2. Understand domain constraints. 3. Map principle to domain context. 4. Generate domain-specific actions. 5. Test and refine.",
        when_to_use: "When applying principles across different domains, when domain expertise is available, when principles need contextualization.",
        when_not_to_use: "When domain constraints invalidate the principle, when domain-specific frameworks already exist, when principles are domain-specific.",
    },
    FrameworkDef {
        title: "DECISION_MATRIX",
        description: "Systematic approach to evaluating options and making decisions.",
        based_on: &["Opportunity Cost", "Systems Thinking"],
        purpose: "Structure decision-making by explicitly comparing options across multiple criteria to reduce bias and improve outcomes.",
        structure: "1. List decision options. 2. Identify evaluation criteria. 3. Weight criteria by importance. 4. Score each option on each criterion. 5. Calculate weighted scores. 6. Select highest-scoring option.",
        when_to_use: "When multiple options exist, when criteria are clear, when decisions have significant consequences, when bias reduction is important.",
        when_not_to_use: "When time is extremely limited, when criteria cannot be defined, when options are not comparable, when intuition is more reliable.",
    },
    FrameworkDef {
        title: "RISK_ASSESSMENT_FRAMEWORK",
        description: "Identify, assess, and mitigate risks systematically.",
        based_on: &["Margin of Safety", "Inversion"],
        purpose: "Systematically identify potential failures, assess their probability and impact, and develop mitigation strategies.",
        structure: "1. Identify potential risks. 2. Assess probability of each risk. 3. Assess impact of each risk. 4. Prioritize by probability x impact. 5. Develop mitigation strategies. 6. Monitor and update.",
        when_to_use: "When outcomes are uncertain, when failures have significant consequences, when planning for the future, when operating in volatile environments.",
        when_not_to_use: "When risks are negligible, when time is extremely limited, when perfect information is available, when risks are completely unpredictable.",
    },
    FrameworkDef {
        title: "GOAL_HIERARCHY_FRAMEWORK",
        description: "Organize goals in a hierarchy from vision to actionable tasks.",
        based_on: &["Hierarchy", "Systems Thinking"],
        purpose: "Structure goals from high-level vision down to specific actions to ensure alignment and enable execution.",
        structure: "1. Define vision (top level). 2. Break into strategic goals. 3. Break goals into objectives. 4. Break objectives into tasks. 5. Assign resources and timelines. 6. Execute and review.",
        when_to_use: "When goals are complex, when multiple levels of abstraction are needed, when alignment is critical, when coordinating multiple actors.",
        when_not_to_use: "When goals are simple and immediate, when hierarchy adds unnecessary complexity, when flexibility is more important than structure.",
    },
];

pub const DERIVED_CONDITIONS: &[EntryDef] = &[
    branch(
        "SCARCITY",
        "The fundamental condition that resources are limited. All forms of scarcity constrain possibilities and create trade-offs.",
        &[
            entry("TIME_SCARCITY", "Time is finite and cannot be created or stored. Every moment spent is an opportunity cost."),
            entry("ENERGY_SCARCITY", "Energy is limited. Physical, mental, and emotional energy must be managed and conserved."),
            entry("ATTENTION_SCARCITY", "Attention is a finite cognitive resource. Focus on one thing means ignoring others."),
            entry("RESOURCE_SCARCITY", "Material resources are finite. Money, materials, and physical assets are limited."),
        ],
    ),
    entry("TRADE_OFFS", "The fundamental reality that choosing one option means forgoing others. Every decision involves trade-offs."),
    entry("OPPORTUNITY_COST", "The value of the next best alternative that must be forgone when making a choice. The true cost of any decision."),
    entry("IRREVERSIBILITY", "Some actions and decisions cannot be undone. Time flows in one direction, and some consequences are permanent."),
    branch(
        "DEGREES_OF_FREEDOM",
        "The number of independent parameters that can vary within constraints. Freedom exists within boundaries.",
        &[branch(
            "FREEDOM",
            "The capacity to act within available degrees of freedom. True freedom exists within constraints, not in their absence.",
            &[
                entry("AUTONOMY", "The ability to act independently without external control or influence. Self-directed action within available degrees of freedom."),
                entry("AGENCY", "The power to make choices and take action. The capacity to cause change through intentional behavior."),
                entry("CHOICE", "The availability of options to act upon. The range of alternatives available within constraints."),
                entry("CAPABILITY", "The skills, resources, and competencies needed to act. The practical means to exercise freedom."),
            ],
        )],
    ),
];

// ---------------------------------------------------------------------------
// AGENTS / ENVIRONMENTS
// ---------------------------------------------------------------------------

pub const AGENT_TYPES: &[EntryDef] = &[
    branch_in(
        "HUMAN",
        "Individual human agents with consciousness, goals, and agency.",
        Human,
        &[
            branch_in(
                "COGNITIVE_ABILITIES",
                "Mental capacities for thinking, reasoning, and problem-solving.",
                Human,
                &[
                    entry_in("STRATEGIC_THINKING", "Long-term planning and pattern recognition.", Human),
                    entry_in("ANALYTICAL_REASONING", "Breaking down complex problems logically.", Human),
                    entry_in("PATTERN_RECOGNITION", "Identifying recurring structures and trends.", Human),
                    entry_in("MENTAL_MODELS", "Internal representations of how systems work.", Human),
                    entry_in("DECISION_MAKING", "Evaluating options and choosing optimal paths.", Human),
                ],
            ),
            branch_in(
                "EMOTIONAL_INTELLIGENCE",
                "Capacity to understand and manage emotions in self and others.",
                Human,
                &[
                    entry_in("SELF_AWARENESS", "Understanding own emotions and triggers.", Human),
                    entry_in("EMPATHY", "Sensing and understanding others' emotions.", Human),
                    entry_in("EMOTIONAL_REGULATION", "Managing emotional responses effectively.", Human),
                    entry_in("MOTIVATION", "Internal drive to pursue goals.", Human),
                    entry_in("SOCIAL_AWARENESS", "Reading social dynamics and group emotions.", Human),
                ],
            ),
            branch_in(
                "PHYSICAL_CAPABILITIES",
                "Bodily capacities for action, endurance, and recovery.",
                Human,
                &[
                    entry_in("ENDURANCE", "Sustained energy output over time.", Human),
                    entry_in("STRENGTH", "Peak force generation capacity.", Human),
                    entry_in("RECOVERY", "Speed of returning to baseline after exertion.", Human),
                    entry_in("COORDINATION", "Fine motor control and movement precision.", Human),
                    entry_in("ADAPTABILITY", "Physical adjustment to changing conditions.", Human),
                ],
            ),
            entry_in("SOCIAL_SKILLS", "Abilities to communicate, persuade, and build relationships.", Human),
            entry_in("CREATIVE_CAPACITY", "Ability to generate novel ideas and solutions.", Human),
        ],
    ),
    entry_in("COLLECTIVE", "Groups of humans acting as a unit (teams, communities, organizations).", Collective),
    entry_in("ARTIFICIAL", "AI systems and automated agents with programmed behaviors.", Artificial),
    entry_in("ORGANISATIONAL", "Formal organizations with structure, processes, and hierarchies.", Organisational),
    entry_in("HYBRID", "Combinations of human and artificial agents working together.", Hybrid),
];

pub const ENVIRONMENT_TYPES: &[EntryDef] = &[
    entry_in("PHYSICAL", "Physical spaces and material environments (offices, homes, nature).", Physical),
    branch_in(
        "ECONOMIC",
        "Economic systems, markets, and financial environments.",
        Economic,
        &[
            branch_in(
                "CAPITAL_MARKETS",
                "Markets for long-term financial instruments.",
                Economic,
                &[
                    entry_in("STOCK_MARKET", "Public equity trading and ownership.", Economic),
                    entry_in("BOND_MARKET", "Debt instruments and fixed income.", Economic),
                    entry_in("DERIVATIVES", "Financial contracts derived from underlying assets.", Economic),
                    entry_in("PRIVATE_EQUITY", "Non-public company ownership and investment.", Economic),
                    entry_in("VENTURE_CAPITAL", "Early-stage company financing.", Economic),
                ],
            ),
            entry_in("LABOR_MARKETS", "Markets for human work and skills.", Economic),
            entry_in("REAL_ESTATE_MARKETS", "Markets for property and land.", Economic),
            entry_in("COMMODITY_MARKETS", "Markets for raw materials and goods.", Economic),
            entry_in("CURRENCY_MARKETS", "Markets for money exchange and forex.", Economic),
        ],
    ),
    branch_in(
        "DIGITAL",
        "Digital spaces, online platforms, and virtual environments.",
        Digital,
        &[
            entry_in("SOCIAL_PLATFORMS", "Networks for human connection and content sharing.", Digital),
            entry_in("MARKETPLACES", "Digital platforms for buying and selling.", Digital),
            entry_in("COLLABORATION_TOOLS", "Software for teamwork and coordination.", Digital),
            entry_in("CONTENT_PLATFORMS", "Platforms for creating and consuming media.", Digital),
            entry_in("BLOCKCHAIN_NETWORKS", "Decentralized digital ledgers and systems.", Digital),
        ],
    ),
    entry_in("SOCIAL", "Social networks, relationships, and cultural environments.", Social),
    entry_in("BIOLOGICAL", "Biological systems, ecosystems, and living environments.", Biological),
];

// ---------------------------------------------------------------------------
// RESOURCES / VALUE
// ---------------------------------------------------------------------------

pub const ENGINE_TYPES: &[EngineDef] = &[
    EngineDef {
        title: "CAREER",
        description: "Career engine generates income through employment. Stable but limited growth potential. Lower fragility but dependent on employment status.",
        engine_type: "CAREER",
    },
    EngineDef {
        title: "BUSINESS",
        description: "Business engine generates income through entrepreneurship and side projects. High potential but higher risk and fragility.",
        engine_type: "BUSINESS",
    },
    EngineDef {
        title: "INVESTMENT",
        description: "Investment engine generates passive income through assets and investments. Requires initial capital but provides long-term wealth building.",
        engine_type: "INVESTMENT",
    },
    EngineDef {
        title: "LEARNING",
        description: "Learning engine converts skills into income. Long-term investment with low fragility as skills persist.",
        engine_type: "LEARNING",
    },
];

/// Finance categories beside the MONEY universal concept; the money-flow
/// category is titled CURRENCY so it does not share a title with it.
pub const FINANCE_CATEGORIES: &[EntryDef] = &[
    branch_in(
        "CURRENCY",
        "Medium of exchange. Cash flow, liquidity, and buffers.",
        Economic,
        &[
            entry_in("CASH_FLOW", "Movement of money in and out. Income streams and expenses.", Economic),
            entry_in("LIQUIDITY", "Accessibility of assets. Ability to convert to cash quickly.", Economic),
            entry_in("BUFFERS", "Safety reserves. Emergency funds and cash cushions.", Economic),
        ],
    ),
    branch_in(
        "INVESTING",
        "Growth mechanisms. Assets, allocation, and compounding.",
        Economic,
        &[
            entry_in("ASSETS", "Owned resources that generate value. Stocks, bonds, real estate, businesses.", Economic),
            entry_in("ALLOCATION", "Distribution of capital across asset classes and investments.", Strategic),
            entry_in("COMPOUNDING", "Exponential growth through reinvestment. Time is the multiplier.", Strategic),
        ],
    ),
    branch_in(
        "RISK",
        "Uncertainty management. Volatility, drawdown, and fragility.",
        Strategic,
        &[
            entry_in("VOLATILITY", "Price fluctuation and variability. Measurement of uncertainty.", Strategic),
            entry_in("DRAWDOWN", "Peak-to-trough decline. Maximum loss from a high point.", Strategic),
            entry_in("FRAGILITY", "Sensitivity to shocks. Vulnerability to extreme events.", Strategic),
        ],
    ),
    branch_in(
        "LEVERAGE",
        "Amplification mechanisms. Debt, credit, and optionality.",
        Strategic,
        &[
            entry_in("DEBT", "Borrowed capital. Liabilities used to amplify returns or opportunities.", Economic),
            entry_in("CREDIT", "Borrowing capacity. Access to capital based on reputation and assets.", Economic),
            entry_in("OPTIONALITY", "Position to benefit from upside while limiting downside. Real options.", Strategic),
        ],
    ),
    branch_in(
        "PROTECTION",
        "Preservation strategies. Insurance, hedging, and redundancy.",
        Strategic,
        &[
            entry_in("INSURANCE", "Risk transfer mechanisms. Protection against losses and liabilities.", Strategic),
            entry_in("HEDGING", "Offsetting risks. Strategies to reduce exposure to adverse movements.", Strategic),
            entry_in("REDUNDANCY", "Backup systems and reserves. Multiple sources of security.", Strategic),
        ],
    ),
];

// ---------------------------------------------------------------------------
// Pathways under universal concepts
// ---------------------------------------------------------------------------

pub const HEALTH_PATHWAYS: &[EntryDef] = &[
    branch(
        "ENERGY",
        "Mitochondrial function, Sleep, Hormones, Metabolic efficiency",
        &[
            entry("MITOCHONDRIAL_FUNCTION", "Cellular energy production"),
            entry("SLEEP", "Sleep quality and recovery"),
            entry("HORMONES", "Hormonal balance and regulation"),
            entry("METABOLIC_EFFICIENCY", "Metabolic health and efficiency"),
        ],
    ),
    branch(
        "NEUROSCIENCE",
        "Stress, Cognition, Mental Health",
        &[
            entry("STRESS", "Stress management and response"),
            entry("COGNITION", "Cognitive function and performance"),
            entry("MENTAL_HEALTH", "Mental health and wellbeing"),
            branch(
                "NUTRITION",
                "Nutrition and brain health",
                &[entry("MACRONUTRIENTS", "Protein, Carbs, Fats")],
            ),
        ],
    ),
    branch(
        "RESPIRATORY",
        "Air Quality, Breathing, Oxygen delivery",
        &[
            entry("AIR_QUALITY", "Environmental air quality"),
            entry("BREATHING", "Breathing techniques and patterns"),
            entry("OXYGEN_DELIVERY", "Oxygen transport and utilization"),
        ],
    ),
    branch(
        "MUSCULOSKELETAL",
        "Exercise, Movement, Posture",
        &[
            entry("EXERCISE", "Physical exercise and training"),
            entry("MOVEMENT", "Movement patterns and mobility"),
            entry("POSTURE", "Postural alignment and health"),
        ],
    ),
    branch(
        "CARDIOVASCULAR",
        "Heart Health, Blood Pressure, Circulation",
        &[
            entry("HEART_HEALTH", "Cardiovascular health"),
            entry("BLOOD_PRESSURE", "Blood pressure regulation"),
            entry("CIRCULATION", "Circulatory system health"),
        ],
    ),
    branch(
        "IMMUNE_SYSTEM",
        "Inflammation, Recovery, Social Connection",
        &[
            entry("INFLAMMATION", "Inflammatory response and management"),
            entry("RECOVERY", "Recovery and healing processes"),
            entry("SOCIAL_CONNECTION", "Social connections and immune health"),
        ],
    ),
];

pub const FINANCE_PATHWAYS: &[EntryDef] = &[
    branch(
        "INVESTMENT",
        "Investment strategies and asset management",
        &[
            branch(
                "EQUITY_MARKETS",
                "Stock market investments",
                &[
                    entry("S&P_500", "S&P 500 index investments"),
                    entry("INDIVIDUAL_STOCKS", "Individual stock selection"),
                ],
            ),
            branch(
                "ASSET_ALLOCATION",
                "Portfolio allocation strategies",
                &[
                    entry("STOCKS", "Stock allocation"),
                    entry("BONDS", "Bond allocation"),
                    entry("CASH", "Cash allocation"),
                ],
            ),
        ],
    ),
    branch(
        "CASH_FLOW",
        "Income, Expenses, Savings Rate",
        &[
            entry("INCOME", "Income sources and management"),
            entry("EXPENSES", "Expense tracking and optimization"),
            entry("SAVINGS_RATE", "Savings rate and accumulation"),
        ],
    ),
    branch(
        "CAPITAL",
        "Debt, Leverage, Net Worth",
        &[
            entry("DEBT", "Debt management and optimization"),
            entry("LEVERAGE", "Strategic use of leverage"),
            entry("NET_WORTH", "Net worth tracking and growth"),
        ],
    ),
];

pub const EDUCATION_PATHWAYS: &[EntryDef] = &[
    branch(
        "TECHNICAL_KNOWLEDGE",
        "Computer Science, Mathematics, Physics",
        &[
            entry("COMPUTER_SCIENCE", "Programming, algorithms, systems"),
            entry("MATHEMATICS", "Mathematical concepts and applications"),
            entry("PHYSICS", "Physical principles and laws"),
        ],
    ),
    branch(
        "FINANCIAL_KNOWLEDGE",
        "Investing, Markets, Economics",
        &[
            entry("INVESTING", "Investment strategies and principles"),
            entry("MARKETS", "Market dynamics and analysis"),
            entry("ECONOMICS", "Economic principles and systems"),
        ],
    ),
    branch(
        "DOMAIN_KNOWLEDGE",
        "Health Science, Business, Psychology",
        &[
            entry("HEALTH_SCIENCE", "Health and medical knowledge"),
            entry("BUSINESS", "Business principles and practices"),
            entry("PSYCHOLOGY", "Psychological principles and behavior"),
        ],
    ),
    branch(
        "META_LEARNING",
        "Study Systems, Memory, Skill Acquisition",
        &[
            entry("STUDY_SYSTEMS", "Effective study methods and systems"),
            entry("MEMORY", "Memory techniques and retention"),
            entry("SKILL_ACQUISITION", "Skill learning and mastery"),
        ],
    ),
];

pub const OPTIONALITY_PATHWAYS: &[EntryDef] = &[
    branch(
        "REVERSIBLE_DECISIONS",
        "Low-cost decisions that can be undone",
        &[
            entry("ROLE_CHANGES", "Internal role transitions within organization"),
            entry("SKILL_ACQUISITION", "Learning new technical stacks and tools"),
            entry("SIDE_PROJECTS", "Low-risk exploration projects and experiments"),
        ],
    ),
    branch(
        "IRREVERSIBLE_DECISIONS",
        "High-cost decisions that permanently narrow future options",
        &[
            entry("DEBT_COMMITMENTS", "Long-term financial obligations and mortgages"),
            entry("LIFESTYLE_INFLATION", "Raising baseline expenses permanently"),
            entry("REPUTATION_DAMAGE", "Trust violations and burned bridges"),
            entry("HEALTH_NEGLECT", "Irreversible health consequences from neglect"),
        ],
    ),
    branch(
        "TRANSFERABLE_SKILLS",
        "Skills that compound across multiple domains",
        &[
            entry("COMMUNICATION", "Written and verbal communication skills"),
            entry("SYSTEMS_THINKING", "Understanding interconnections and feedback loops"),
            entry("PROBLEM_DECOMPOSITION", "Breaking complex problems into manageable parts"),
            entry("LEARNING_HOW_TO_LEARN", "Meta-learning and skill acquisition strategies"),
        ],
    ),
    branch(
        "PROOF_ARTIFACTS",
        "Durable outputs that demonstrate competence and impact",
        &[
            entry("DOCUMENTATION", "Design docs, technical guides, post-mortems"),
            entry("METRICS", "Before/after measurements and impact quantification"),
            entry("REUSABLE_SYSTEMS", "Tools and systems others can use"),
            entry("DECISION_LOGS", "Tracked decisions and learning over time"),
        ],
    ),
];

pub const REPUTATION_PATHWAYS: &[EntryDef] = &[
    branch(
        "TRUST_PILLARS",
        "Three components of trust: competence, reliability, alignment",
        &[
            entry("COMPETENCE", "Technical ability and domain expertise"),
            entry("RELIABILITY", "Consistent delivery and dependable execution"),
            entry("ALIGNMENT", "Acting in shared interest with stakeholders"),
        ],
    ),
    branch(
        "REPUTATION_BURNS",
        "Fast ways to destroy reputation capital",
        &[
            entry("OVERPROMISING", "Committing beyond realistic capacity"),
            entry("UNOWNED_FAILURE", "Blaming systems or people instead of owning mistakes"),
            entry("DEFENSIVENESS", "Treating feedback as personal threat"),
            entry("POSITION_SHIFTING", "Changing story when proven wrong"),
        ],
    ),
    branch(
        "MICRO_DEPOSITS",
        "Daily reputation building through small actions",
        &[
            entry("CONSISTENT_DELIVERY", "Reliability under pressure and uncertainty"),
            entry("EARLY_COMMUNICATION", "Delivering bad news quickly to avoid surprises"),
            entry("VISIBLE_CLOSURE", "Explicitly closing loops and confirming resolution"),
            entry("UNDER_PROMISE", "Promising less and delivering more consistently"),
        ],
    ),
    branch(
        "EGO_MANAGEMENT",
        "Separating ego from identity to preserve reputation",
        &[
            entry("CURIOSITY_RESPONSE", "Responding to criticism with genuine questions"),
            entry("IDENTITY_SEPARATION", "Being wrong does not mean being worthless"),
            entry("FEEDBACK_AS_DATA", "Converting emotional criticism into useful signal"),
            entry("COURSE_CORRECTION", "Adjusting behavior without drama or defensiveness"),
        ],
    ),
];

/// Pathway table and category for a system's universal concept, if it has one.
pub fn pathways_for(system_id: &str) -> Option<(&'static [EntryDef], NodeCategory)> {
    match system_id {
        "health" => Some((HEALTH_PATHWAYS, Biological)),
        "money" | "finance" => Some((FINANCE_PATHWAYS, Economic)),
        "education" => Some((EDUCATION_PATHWAYS, Foundational)),
        "optionality" => Some((OPTIONALITY_PATHWAYS, Strategic)),
        "reputation" | "trust" => Some((REPUTATION_PATHWAYS, CrossSystem)),
        _ => None,
    }
}

/// Systems whose universal concept has no generic CONCEPTS child.
pub const SYSTEMS_WITHOUT_GENERIC_CONCEPTS: &[&str] = &["health", "money", "finance", "education"];

pub fn universal_concept_title(system_id: &str) -> &'static str {
    match system_id {
        "health" => "BIOLOGY",
        "money" => "MONEY",
        "energy" => "ENERGY",
        "investment" => "INVESTMENT",
        "training" => "TRAINING",
        "education" => "LEARNING",
        "travel" => "TRAVEL",
        "meaning" => "MEANING",
        _ => "CONCEPT",
    }
}

// ---------------------------------------------------------------------------
// SYSTEMS by tier
// ---------------------------------------------------------------------------

/// At most this many systems are seeded per tier, and sub-systems per system.
pub const MAX_PER_TIER: usize = 3;

pub const SYSTEM_TIERS: &[TierDef] = &[
    TierDef {
        name: "SURVIVAL_TIER",
        order_index: 1,
        systems: &[SystemDef {
            id: "health",
            name: "HEALTH",
            description: "Human operating stability: physical health, mental resilience, cognitive efficiency, and recovery elasticity.",
            mantra: "Capacity governs everything else.",
            route: "/master/health",
            order_index: 1,
            sub_systems: &[
                ("CAPACITY", "Capacity state management and tracking"),
                ("RECOVERY", "Recovery actions and elasticity"),
                ("RESILIENCE", "Mental and physical resilience"),
            ],
        }],
    },
    TierDef {
        name: "STABILITY_TIER",
        order_index: 2,
        systems: &[
            SystemDef {
                id: "money",
                name: "MONEY",
                description: "Financial guidance with AI agents, domain teams, and interactive products.",
                mantra: "Cash flow is oxygen. Buffers are armor.",
                route: "/master/money",
                order_index: 1,
                sub_systems: &[
                    ("PRODUCTS", "Financial products and services"),
                    ("AGENTS", "AI agents for financial guidance"),
                    ("TEAMS", "Domain teams and workflows"),
                ],
            },
            SystemDef {
                id: "energy",
                name: "ENERGY",
                description: "Track and manage your energy levels and capacity.",
                mantra: "Energy is the currency of action.",
                route: "/master/energy",
                order_index: 2,
                sub_systems: &[
                    ("STATES", "Energy states and levels"),
                    ("LEVELS", "Energy capacity levels"),
                    ("BUFFS", "Energy enhancements and buffs"),
                ],
            },
        ],
    },
    TierDef {
        name: "GROWTH_TIER",
        order_index: 3,
        systems: &[
            SystemDef {
                id: "education",
                name: "EDUCATION",
                description: "Education System (Tier 0). Learning, knowledge acquisition, and skill development across all domains.",
                mantra: "Learning is the foundation of all growth.",
                route: "/master/education",
                order_index: 0,
                // LEARNING is already the universal concept title under this system
                sub_systems: &[
                    ("LEARNING_METHODS", "Learning systems and methods"),
                    ("KNOWLEDGE", "Knowledge acquisition and retention"),
                    ("SKILLS", "Skill development and mastery"),
                ],
            },
            SystemDef {
                id: "investment",
                name: "INVESTMENT",
                description: "Portfolio management, rebalancing, and investment strategies.",
                mantra: "Compound time, not just money.",
                route: "/systems/investment",
                order_index: 1,
                sub_systems: &[],
            },
            SystemDef {
                id: "training",
                name: "TRAINING",
                description: "Skill development and progression tracking.",
                mantra: "Skills compound, habits compound.",
                route: "/systems/training",
                order_index: 2,
                sub_systems: &[],
            },
        ],
    },
    TierDef {
        name: "LEVERAGE_TIER",
        order_index: 4,
        systems: &[],
    },
    TierDef {
        name: "EXPRESSION_TIER",
        order_index: 5,
        systems: &[
            SystemDef {
                id: "travel",
                name: "TRAVEL",
                description: "Find location alternatives and travel recommendations.",
                mantra: "Location is optionality.",
                route: "/master/travel",
                order_index: 1,
                sub_systems: &[],
            },
            SystemDef {
                id: "meaning",
                name: "MEANING",
                description: "Purpose, values alignment, and spiritual/psychological resilience.",
                mantra: "Purpose protects against decay.",
                route: "/knowledge/meaning",
                order_index: 2,
                sub_systems: &[],
            },
        ],
    },
    TierDef {
        name: "CROSS_SYSTEM_STATES",
        order_index: 6,
        systems: &[
            SystemDef {
                id: "trust",
                name: "TRUST",
                description: "Global modifier that affects multiple systems. Built on competence, reliability, and alignment.",
                mantra: "Trust is a forward-looking belief.",
                route: "/systems/trust",
                order_index: 1,
                sub_systems: &[],
            },
            SystemDef {
                id: "reputation",
                name: "REPUTATION",
                description: "Cross-system state that governs access to opportunities, partnerships, and resources.",
                mantra: "Reputation is not what people think of you. It is what they expect from you.",
                route: "/systems/reputation",
                order_index: 2,
                sub_systems: &[],
            },
            SystemDef {
                id: "optionality",
                name: "OPTIONALITY",
                description: "Cross-system state representing available choices and strategic freedom.",
                mantra: "Optionality is the right, but not the obligation, to act.",
                route: "/systems/optionality",
                order_index: 3,
                sub_systems: &[],
            },
            SystemDef {
                id: "energy-reserve",
                name: "ENERGY_RESERVE",
                description: "Cross-system state representing stored energy capacity beyond daily budget.",
                mantra: "Reserve energy enables sustained effort when needed.",
                route: "/systems/energy-reserve",
                order_index: 4,
                sub_systems: &[],
            },
        ],
    },
];
