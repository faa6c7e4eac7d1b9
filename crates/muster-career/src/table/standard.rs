//! The standard career tracks.
//!
//! Army, Marines and Navy are military tracks with a parallel officer
//! track. Drifter is the fallback: no qualification, always eligible.

use std::collections::BTreeMap;

use muster_mechanics::Stat::{self, *};

use super::grant::{Benefit, BenefitEntry, Grant, Pick, Requirement, StatTarget};
use super::{AgePenalty, CareerTable, MilitaryRules, RankBenefit, RankLadder, Specialization};

/// Education needed for advanced training in the standard tracks.
pub const ADVANCED_EDUCATION: u32 = 8;

/// Default commission requirement for military tracks.
pub const COMMISSION: StatTarget = StatTarget {
    stat: SocialStatus,
    target: 8,
};

/// Every standard track, fallback first.
pub fn all() -> Vec<CareerTable> {
    vec![drifter(), scout(), agent(), army(), marines(), navy()]
}

fn s(name: &str) -> Pick<Grant> {
    Grant::skill(name).into()
}

fn st(stat: Stat) -> Pick<Grant> {
    Grant::stat(stat).into()
}

fn one_of(names: &[&str]) -> Pick<Grant> {
    Pick::choose(names.iter().map(|n| Grant::skill(*n)))
}

fn req(stat: Stat, target: u32) -> Requirement {
    StatTarget::new(stat, target).into()
}

fn skill_at(name: &str, level: u32) -> Grant {
    Grant::skill(name).at(level)
}

fn rank(title: &str) -> RankBenefit {
    RankBenefit::titled(title)
}

fn ladder(entries: impl IntoIterator<Item = (u32, RankBenefit)>) -> RankLadder {
    entries.into_iter().collect()
}

fn texts<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn item(name: &str) -> Benefit {
    Benefit::Item(name.to_string())
}

fn spec(
    name: &str,
    survival: Requirement,
    advancement: Requirement,
    skills: [Pick<Grant>; 6],
    ranks: &str,
) -> Specialization {
    Specialization {
        name: name.to_string(),
        survival,
        advancement,
        skills,
        ranks: ranks.to_string(),
    }
}

fn military(officer_skills: [Pick<Grant>; 6], penalty_age: u32) -> Option<MilitaryRules> {
    Some(MilitaryRules {
        commission: COMMISSION.into(),
        officer_ranks: "officer".to_string(),
        officer_skills,
        age_penalty: AgePenalty {
            age: penalty_age,
            dm: -2,
        },
    })
}

fn ladders(entries: impl IntoIterator<Item = (&'static str, RankLadder)>) -> BTreeMap<String, RankLadder> {
    entries
        .into_iter()
        .map(|(name, ladder)| (name.to_string(), ladder))
        .collect()
}

/// The fallback track.
pub fn drifter() -> CareerTable {
    CareerTable {
        name: "Drifter".to_string(),
        qualification: None,
        fallback: true,
        advanced_education: None,
        personal_skills: [
            st(Strength),
            st(Endurance),
            st(Dexterity),
            s("Language"),
            s("Profession"),
            s("Jack-of-all-Trades"),
        ],
        service_skills: [
            s("Athletics"),
            s("Melee:Unarmed"),
            s("Recon"),
            s("Streetwise"),
            s("Stealth"),
            s("Survival"),
        ],
        advanced_skills: None,
        specializations: vec![
            spec(
                "Barbarian",
                req(Endurance, 7),
                req(Strength, 7),
                [
                    s("Animals"),
                    s("Carouse"),
                    s("Melee:Blade"),
                    s("Stealth"),
                    one_of(&["Seafarer:Personal", "Seafarer:Sail"]),
                    s("Survival"),
                ],
                "barbarian",
            ),
            spec(
                "Wanderer",
                req(Endurance, 7),
                req(Intelligence, 7),
                [
                    s("Drive"),
                    s("Deception"),
                    s("Recon"),
                    s("Stealth"),
                    s("Streetwise"),
                    s("Survival"),
                ],
                "wanderer",
            ),
            spec(
                "Scavenger",
                req(Dexterity, 7),
                req(Endurance, 7),
                [
                    s("Pilot:Small Craft"),
                    s("Mechanic"),
                    s("Astrogation"),
                    s("Vacc Suit"),
                    s("Profession"),
                    s("Gun Combat"),
                ],
                "scavenger",
            ),
        ],
        ladders: ladders([
            (
                "barbarian",
                ladder([
                    (1, RankBenefit::default().with(skill_at("Survival", 1))),
                    (2, rank("Warrior").with(skill_at("Melee:Blade", 1))),
                    (4, rank("Chieftain").with(skill_at("Leadership", 1))),
                    (6, rank("Warlord")),
                ]),
            ),
            (
                "wanderer",
                ladder([
                    (1, RankBenefit::default().with(skill_at("Streetwise", 1))),
                    (3, RankBenefit::default().with(skill_at("Deception", 1))),
                ]),
            ),
            (
                "scavenger",
                ladder([
                    (1, RankBenefit::default().with(skill_at("Vacc Suit", 1))),
                    (
                        3,
                        RankBenefit::default().with(Pick::choose([
                            skill_at("Profession", 1),
                            skill_at("Mechanic", 1),
                        ])),
                    ),
                ]),
            ),
        ]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "A patron offers a job of dubious legality",
            "You fall in with a gang and learn the streets",
            "You scrape by working odd jobs",
            "You make a friend among the wanderers",
            "Life is quiet for a change",
            "Life events crowd in on you",
            "You are attacked by enemies from your past",
            "You are offered a chance at a risky but lucrative venture",
            "You find an abandoned cache of supplies",
            "You are forcibly drafted into the service",
        ]),
        mishaps: texts([
            "Severely injured in a brawl",
            "A patron double-crosses you",
            "You are hunted out of town",
            "You are betrayed by a friend",
            "An illness leaves you weakened",
            "You are framed for a crime you did not commit",
        ]),
        credits: vec![0, 0, 1000, 2000, 3000, 4000, 8000],
        benefits: vec![
            item("Contact").into(),
            item("Weapon").into(),
            item("Ally").into(),
            item("Weapon").into(),
            Benefit::Stat(Education).into(),
            item("Ship Share").into(),
            item("Ship Share").into(),
        ],
        military: None,
    }
}

/// Scout service.
pub fn scout() -> CareerTable {
    CareerTable {
        name: "Scout".to_string(),
        qualification: Some(req(Intelligence, 5)),
        fallback: false,
        advanced_education: Some(ADVANCED_EDUCATION),
        personal_skills: [
            st(Strength),
            st(Dexterity),
            st(Endurance),
            st(Intelligence),
            st(Education),
            s("Jack-of-all-Trades"),
        ],
        service_skills: [
            s("Pilot:Small Craft"),
            s("Survival"),
            s("Mechanic"),
            s("Astrogation"),
            s("Vacc Suit"),
            s("Gun Combat"),
        ],
        advanced_skills: Some([
            s("Medic"),
            s("Navigation"),
            s("Seafarer"),
            s("Explosives"),
            s("Science"),
            s("Jack-of-all-Trades"),
        ]),
        specializations: vec![
            spec(
                "Courier",
                req(Endurance, 5),
                req(Education, 9),
                [
                    s("Electronics"),
                    s("Flyer"),
                    s("Pilot:Spacecraft"),
                    s("Engineer"),
                    s("Athletics"),
                    s("Astrogation"),
                ],
                "scout",
            ),
            spec(
                "Surveyor",
                req(Endurance, 6),
                req(Intelligence, 8),
                [
                    s("Electronics"),
                    s("Persuade"),
                    s("Pilot"),
                    s("Navigation"),
                    s("Diplomat"),
                    s("Streetwise"),
                ],
                "scout",
            ),
            spec(
                "Explorer",
                req(Endurance, 7),
                req(Education, 7),
                [
                    s("Electronics"),
                    s("Pilot"),
                    s("Engineer"),
                    s("Science"),
                    s("Stealth"),
                    s("Recon"),
                ],
                "scout",
            ),
        ],
        ladders: ladders([(
            "scout",
            ladder([
                (1, rank("Scout").with(skill_at("Vacc Suit", 1))),
                (3, rank("Senior Scout").with(skill_at("Pilot", 1))),
            ]),
        )]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "Your ship is ambushed by pirates",
            "You survey an alien world",
            "You perform an exemplary service for the scouts",
            "You spend years in the jump-space wilderness",
            "Life events crowd in on you",
            "You gather intelligence on an alien race",
            "You are assigned to a diplomatic mission",
            "You cooperate with another service on a mission",
            "You have a chance to make a daring discovery",
            "You serve as a courier for an important message",
        ]),
        mishaps: texts([
            "Severely injured in a crash landing",
            "Psychologically damaged by time in the deep",
            "Your ship is damaged and you must hitch home",
            "You inadvertently cause a conflict",
            "You have no idea what happened to you",
            "You are injured on an alien world",
        ]),
        credits: vec![20_000, 20_000, 30_000, 30_000, 50_000, 50_000, 50_000],
        benefits: vec![
            item("Ship Share").into(),
            Benefit::Stat(Intelligence).into(),
            Benefit::Stat(Education).into(),
            item("Weapon").into(),
            item("Weapon").into(),
            item("Scout Ship").into(),
            item("Scout Ship").into(),
        ],
        military: None,
    }
}

/// Agents: law enforcement, intelligence and corporate work.
pub fn agent() -> CareerTable {
    CareerTable {
        name: "Agent".to_string(),
        qualification: Some(req(Intelligence, 6)),
        fallback: false,
        advanced_education: Some(ADVANCED_EDUCATION),
        personal_skills: [
            s("Gun Combat"),
            st(Dexterity),
            st(Endurance),
            s("Melee"),
            st(Intelligence),
            s("Athletics"),
        ],
        service_skills: [
            s("Streetwise"),
            s("Drive"),
            s("Investigate"),
            s("Flyer"),
            s("Recon"),
            s("Gun Combat"),
        ],
        advanced_skills: Some([
            s("Advocate"),
            s("Language"),
            s("Explosives"),
            s("Medic"),
            s("Vacc Suit"),
            s("Electronics"),
        ]),
        specializations: vec![
            spec(
                "Law Enforcement",
                req(Endurance, 6),
                req(Intelligence, 6),
                [
                    s("Investigate"),
                    s("Recon"),
                    s("Streetwise"),
                    s("Stealth"),
                    s("Melee"),
                    s("Advocate"),
                ],
                "police",
            ),
            spec(
                "Intelligence",
                req(Intelligence, 7),
                req(Intelligence, 5),
                [
                    s("Investigate"),
                    s("Recon"),
                    s("Electronics:Comms"),
                    s("Stealth"),
                    s("Persuade"),
                    s("Deception"),
                ],
                "agency",
            ),
            spec(
                "Corporate",
                req(Intelligence, 5),
                req(Intelligence, 7),
                [
                    s("Investigate"),
                    s("Electronics:Computers"),
                    s("Stealth"),
                    s("Carouse"),
                    s("Deception"),
                    s("Streetwise"),
                ],
                "agency",
            ),
        ],
        ladders: ladders([
            (
                "police",
                ladder([
                    (0, rank("Rookie")),
                    (1, rank("Corporal").with(skill_at("Streetwise", 1))),
                    (2, rank("Sergeant")),
                    (3, rank("Detective")),
                    (4, rank("Lieutenant").with(skill_at("Investigate", 1))),
                    (5, rank("Chief").with(skill_at("Admin", 1))),
                    (6, rank("Commissioner").with(Grant::stat(SocialStatus).at(10))),
                ]),
            ),
            (
                "agency",
                ladder([
                    (1, rank("Agent").with(skill_at("Deception", 1))),
                    (2, rank("Field Agent").with(skill_at("Investigate", 1))),
                    (4, rank("Special Agent").with(skill_at("Gun Combat", 1))),
                    (5, rank("Assistant Director")),
                    (6, rank("Director")),
                ]),
            ),
        ]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "An investigation takes a dangerous turn",
            "You complete a mission for your superiors",
            "You establish a network of contacts",
            "You are given specialist training in vehicles",
            "Life events crowd in on you",
            "You go undercover to investigate an enemy",
            "You are rewarded for a job well done",
            "You uncover corruption in your own organisation",
            "You are offered an assignment abroad",
            "Your superior takes a special interest in your career",
        ]),
        mishaps: texts([
            "Severely injured in the line of duty",
            "A criminal you were investigating offers you a deal",
            "An investigation goes critically wrong",
            "You learn something you should not know",
            "Your work ends up coming home with you",
            "You are injured in a firefight",
        ]),
        credits: vec![1000, 2000, 5000, 7500, 10_000, 25_000, 50_000],
        benefits: vec![
            item("Scientific Equipment").into(),
            Benefit::Stat(Intelligence).into(),
            item("Ship Share").into(),
            item("Weapon").into(),
            item("Combat Implant").into(),
            BenefitEntry::choose([Benefit::Stat(SocialStatus), item("Combat Implant")]),
            BenefitEntry::All(vec![item("Ship Share"), item("Ship Share")]),
        ],
        military: None,
    }
}

/// The planetary army.
pub fn army() -> CareerTable {
    CareerTable {
        name: "Army".to_string(),
        qualification: Some(req(Endurance, 5)),
        fallback: false,
        advanced_education: Some(ADVANCED_EDUCATION),
        personal_skills: [
            st(Strength),
            st(Dexterity),
            st(Endurance),
            s("Gambler"),
            s("Medic"),
            s("Melee"),
        ],
        service_skills: [
            one_of(&["Drive", "Vacc Suit"]),
            s("Athletics"),
            s("Gun Combat"),
            s("Recon"),
            s("Melee"),
            s("Heavy Weapons"),
        ],
        advanced_skills: Some([
            s("Tactics:Military"),
            s("Electronics"),
            s("Navigation"),
            s("Explosives"),
            s("Engineer"),
            s("Survival"),
        ]),
        specializations: vec![
            spec(
                "Support",
                req(Endurance, 5),
                req(Education, 7),
                [
                    s("Mechanic"),
                    one_of(&["Drive", "Flyer"]),
                    s("Profession"),
                    s("Explosives"),
                    s("Electronics:Comms"),
                    s("Medic"),
                ],
                "enlisted",
            ),
            spec(
                "Infantry",
                req(Strength, 6),
                req(Education, 6),
                [
                    s("Gun Combat"),
                    s("Melee"),
                    s("Heavy Weapons"),
                    s("Stealth"),
                    s("Athletics"),
                    s("Recon"),
                ],
                "enlisted",
            ),
            spec(
                "Cavalry",
                req(Intelligence, 7),
                req(Intelligence, 5),
                [
                    s("Mechanic"),
                    s("Drive"),
                    s("Flyer"),
                    s("Recon"),
                    s("Heavy Weapons:Vehicle"),
                    s("Electronics:Sensors"),
                ],
                "enlisted",
            ),
        ],
        ladders: ladders([
            (
                "enlisted",
                ladder([
                    (0, rank("Private").with(skill_at("Gun Combat", 1))),
                    (1, rank("Lance Corporal").with(skill_at("Recon", 1))),
                    (2, rank("Corporal")),
                    (3, rank("Lance Sergeant").with(skill_at("Leadership", 1))),
                    (4, rank("Sergeant")),
                    (5, rank("Gunnery Sergeant")),
                    (6, rank("Sergeant Major")),
                ]),
            ),
            (
                "officer",
                ladder([
                    (1, rank("Lieutenant").with(skill_at("Leadership", 1))),
                    (2, rank("Captain")),
                    (3, rank("Major").with(skill_at("Tactics:Military", 1))),
                    (4, rank("Lieutenant Colonel")),
                    (5, rank("Colonel")),
                    (6, rank("General").with(Grant::stat(SocialStatus).at(10))),
                ]),
            ),
        ]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "You are assigned to a planet with a hostile environment",
            "You are assigned to an urban battlefield",
            "You are given a special assignment or duty in your unit",
            "You are thrown into a brutal ground war",
            "Life events crowd in on you",
            "You are given advanced training in a specialist field",
            "Surrounded and outnumbered, you hold out until relief arrives",
            "You are assigned to a peacekeeping role",
            "Your commanding officer takes an interest in your career",
            "You display heroism in battle",
        ]),
        mishaps: texts([
            "Severely injured in action",
            "Your unit is slaughtered in a disastrous battle",
            "You are sent to a very unpleasant region",
            "You discover your commanding officer is engaged in illegal activity",
            "You are tormented by a quarrel with an officer",
            "You are injured in training",
        ]),
        credits: vec![2000, 5000, 10_000, 10_000, 10_000, 20_000, 30_000],
        benefits: vec![
            item("Combat Implant").into(),
            Benefit::Stat(Intelligence).into(),
            Benefit::Stat(Education).into(),
            item("Weapon").into(),
            item("Armour").into(),
            BenefitEntry::choose([Benefit::Stat(Endurance), item("Combat Implant")]),
            Benefit::Stat(SocialStatus).into(),
        ],
        military: military(
            [
                s("Tactics:Military"),
                s("Leadership"),
                s("Advocate"),
                s("Diplomat"),
                s("Electronics"),
                s("Admin"),
            ],
            30,
        ),
    }
}

/// The marines.
pub fn marines() -> CareerTable {
    CareerTable {
        name: "Marines".to_string(),
        qualification: Some(req(Endurance, 6)),
        fallback: false,
        advanced_education: Some(ADVANCED_EDUCATION),
        personal_skills: [
            st(Strength),
            st(Dexterity),
            st(Endurance),
            s("Gambler"),
            s("Melee:Unarmed"),
            s("Melee:Blade"),
        ],
        service_skills: [
            s("Athletics"),
            s("Vacc Suit"),
            s("Tactics"),
            s("Heavy Weapons"),
            s("Gun Combat"),
            s("Stealth"),
        ],
        advanced_skills: Some([
            s("Medic"),
            s("Survival"),
            s("Explosives"),
            s("Engineer"),
            s("Pilot"),
            s("Navigation"),
        ]),
        specializations: vec![
            spec(
                "Support",
                req(Endurance, 5),
                req(Education, 7),
                [
                    s("Electronics"),
                    s("Mechanic"),
                    one_of(&["Drive", "Flyer"]),
                    s("Medic"),
                    s("Heavy Weapons"),
                    s("Gun Combat"),
                ],
                "enlisted",
            ),
            spec(
                "Star Marine",
                req(Endurance, 6),
                req(Education, 6),
                [
                    s("Vacc Suit"),
                    s("Athletics"),
                    s("Gunner"),
                    s("Melee:Blade"),
                    s("Electronics"),
                    s("Gun Combat"),
                ],
                "enlisted",
            ),
            spec(
                "Ground Assault",
                req(Endurance, 7),
                req(Education, 5),
                [
                    s("Vacc Suit"),
                    s("Heavy Weapons"),
                    s("Recon"),
                    s("Melee:Blade"),
                    s("Tactics:Military"),
                    s("Gun Combat"),
                ],
                "enlisted",
            ),
        ],
        ladders: ladders([
            (
                "enlisted",
                ladder([
                    (
                        0,
                        rank("Marine").with(Pick::choose([
                            skill_at("Gun Combat", 1),
                            skill_at("Melee:Blade", 1),
                        ])),
                    ),
                    (1, rank("Lance Corporal").with(skill_at("Gun Combat", 1))),
                    (2, rank("Corporal")),
                    (3, rank("Lance Sergeant").with(skill_at("Leadership", 1))),
                    (4, rank("Sergeant")),
                    (5, rank("Gunnery Sergeant").with(Grant::stat(Endurance).at(8))),
                    (6, rank("Sergeant Major")),
                ]),
            ),
            (
                "officer",
                ladder([
                    (1, rank("Lieutenant").with(skill_at("Leadership", 1))),
                    (2, rank("Captain")),
                    (3, rank("Force Commander").with(skill_at("Tactics", 1))),
                    (4, rank("Lieutenant Colonel")),
                    (5, rank("Colonel").with(Grant::stat(SocialStatus).at(10))),
                    (6, rank("Brigadier")),
                ]),
            ),
        ]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "Trapped behind enemy lines",
            "You are assigned to the security staff of a space station",
            "You are given advanced training in a specialist field",
            "You are assigned to an assault on an enemy fortress",
            "Life events crowd in on you",
            "You are on the front lines of a planetary assault",
            "A mission goes wrong and you are one of the few survivors",
            "You are assigned to a black ops mission",
            "Your commanding officer takes an interest in your career",
            "You display heroism in battle",
        ]),
        mishaps: texts([
            "Severely injured in action",
            "A mission goes wrong and you are captured",
            "You are sent to a very unpleasant region",
            "You are blamed for a disaster in the field",
            "You quarrel with an officer or fellow marine",
            "You are injured in a shipboard accident",
        ]),
        credits: vec![2000, 5000, 5000, 10_000, 20_000, 30_000, 40_000],
        benefits: vec![
            item("Armour").into(),
            Benefit::Stat(Intelligence).into(),
            Benefit::Stat(Education).into(),
            item("Weapon").into(),
            item("TAS Membership").into(),
            BenefitEntry::choose([Benefit::Stat(Endurance), item("Armour")]),
            BenefitEntry::All(vec![
                Benefit::Stat(SocialStatus),
                Benefit::Stat(SocialStatus),
            ]),
        ],
        military: military(
            [
                s("Electronics"),
                s("Tactics"),
                s("Admin"),
                s("Advocate"),
                s("Vacc Suit"),
                s("Leadership"),
            ],
            30,
        ),
    }
}

/// The interstellar navy.
pub fn navy() -> CareerTable {
    CareerTable {
        name: "Navy".to_string(),
        qualification: Some(req(Intelligence, 6)),
        fallback: false,
        advanced_education: Some(ADVANCED_EDUCATION),
        personal_skills: [
            st(Strength),
            st(Dexterity),
            st(Endurance),
            st(Intelligence),
            st(Education),
            st(SocialStatus),
        ],
        service_skills: [
            s("Pilot"),
            s("Vacc Suit"),
            s("Athletics"),
            s("Gunner"),
            s("Mechanic"),
            s("Gun Combat"),
        ],
        advanced_skills: Some([
            s("Electronics"),
            s("Astrogation"),
            s("Engineer"),
            s("Drive"),
            s("Navigation"),
            s("Admin"),
        ]),
        specializations: vec![
            spec(
                "Line Crew",
                req(Intelligence, 5),
                req(Education, 7),
                [
                    s("Electronics"),
                    s("Mechanic"),
                    s("Gun Combat"),
                    s("Flyer"),
                    s("Melee"),
                    s("Vacc Suit"),
                ],
                "enlisted",
            ),
            spec(
                "Engineer Gunner",
                req(Intelligence, 6),
                req(Education, 6),
                [
                    s("Engineer"),
                    s("Mechanic"),
                    s("Electronics"),
                    s("Engineer"),
                    s("Gunner"),
                    s("Flyer"),
                ],
                "enlisted",
            ),
            spec(
                "Flight",
                req(Dexterity, 7),
                req(Education, 5),
                [
                    s("Pilot"),
                    s("Flyer"),
                    s("Gunner"),
                    s("Pilot:Small Craft"),
                    s("Astrogation"),
                    s("Electronics"),
                ],
                "enlisted",
            ),
        ],
        ladders: ladders([
            (
                "enlisted",
                ladder([
                    (0, rank("Crewman")),
                    (1, rank("Able Spacehand").with(skill_at("Mechanic", 1))),
                    (2, rank("Petty Officer 3rd class").with(skill_at("Vacc Suit", 1))),
                    (3, rank("Petty Officer 2nd class")),
                    (4, rank("Petty Officer 1st class").with(Grant::stat(Endurance).at(8))),
                    (5, rank("Chief Petty Officer")),
                    (6, rank("Master Chief")),
                ]),
            ),
            (
                "officer",
                ladder([
                    (1, rank("Ensign").with(skill_at("Melee:Blade", 1))),
                    (2, rank("Sublieutenant").with(skill_at("Leadership", 1))),
                    (3, rank("Lieutenant")),
                    (4, rank("Commander").with(skill_at("Tactics:Naval", 1))),
                    (5, rank("Captain").with(Grant::stat(SocialStatus).at(10))),
                    (6, rank("Admiral").with(Grant::stat(SocialStatus).at(12))),
                ]),
            ),
        ]),
        events: texts([
            "Disaster! Roll on the mishap table but stay in the career",
            "You are given a special assignment aboard a capital ship",
            "You are involved in a gambling ring aboard ship",
            "You are given a special assignment or duty on board",
            "Your ship participates in a notable military engagement",
            "Life events crowd in on you",
            "Your ship is involved in a diplomatic mission",
            "You foil an attempted crime on board",
            "You have the opportunity to abuse your position",
            "Your commanding officer takes an interest in your career",
            "You display heroism in battle, saving the ship",
        ]),
        mishaps: texts([
            "Severely injured in a ship battle",
            "Placed in the brig after a dispute with a superior",
            "You are blamed for an accident that killed crew",
            "You are discharged after a botched operation",
            "Your ship is destroyed and you are one of the few survivors",
            "You are injured in a shipboard accident",
        ]),
        credits: vec![1000, 5000, 5000, 10_000, 20_000, 50_000, 50_000],
        benefits: vec![
            BenefitEntry::choose([item("Personal Vehicle"), item("Ship Share")]),
            Benefit::Stat(Intelligence).into(),
            BenefitEntry::choose([Benefit::Stat(Education), item("2x Ship Share")]),
            item("Weapon").into(),
            item("TAS Membership").into(),
            BenefitEntry::choose([item("Ship's Boat"), item("2x Ship Share")]),
            BenefitEntry::All(vec![
                Benefit::Stat(SocialStatus),
                Benefit::Stat(SocialStatus),
            ]),
        ],
        military: military(
            [
                s("Leadership"),
                s("Electronics"),
                s("Pilot"),
                s("Melee:Blade"),
                s("Admin"),
                s("Tactics:Naval"),
            ],
            34,
        ),
    }
}
