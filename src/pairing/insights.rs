use serde::{Serialize, Deserialize};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::assessment::TypologyId;

/// Authored coaching copy for one unordered pair of categories. Read-only
/// reference data; nothing here is created at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingInsight {
    pub strength: String,
    pub friction: String,
    pub growth_tip: String,
}

pub(crate) type InsightTable = HashMap<(String, String), PairingInsight>;

pub(crate) fn insight_table(typology: TypologyId) -> &'static InsightTable {
    match typology {
        TypologyId::LoveLanguage => &LOVE_LANGUAGE_INSIGHTS,
        TypologyId::Attachment => &ATTACHMENT_INSIGHTS,
        TypologyId::Enneagram => &ENNEAGRAM_INSIGHTS,
    }
}

fn insight(
    a: &str,
    b: &str,
    strength: &str,
    friction: &str,
    growth_tip: &str,
) -> ((String, String), PairingInsight) {
    let key = if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    };
    (
        key,
        PairingInsight {
            strength: strength.to_string(),
            friction: friction.to_string(),
            growth_tip: growth_tip.to_string(),
        },
    )
}

static LOVE_LANGUAGE_INSIGHTS: Lazy<InsightTable> = Lazy::new(|| {
    // One entry per unordered pair of the five languages, identical pairs
    // included: C(5,2) + 5 = 15.
    [
        insight(
            "words_of_affirmation", "words_of_affirmation",
            "You both say the love out loud, so neither of you has to guess where you stand.",
            "A careless remark cuts twice as deep when words are the currency for both of you.",
            "Keep a shared habit of one specific appreciation a day, especially after disagreements.",
        ),
        insight(
            "words_of_affirmation", "quality_time",
            "Long conversations feed you both: one hears the love, the other feels the presence.",
            "Compliments delivered in passing can feel hollow to the partner who wants unhurried time.",
            "Say the affirming things during planned one-on-one time, not on the way out the door.",
        ),
        insight(
            "words_of_affirmation", "acts_of_service",
            "One of you narrates the love, the other demonstrates it, covering both channels.",
            "The doer may hear praise as talk instead of help; the talker may miss thanks in the doing.",
            "Name the chores out loud: thank the act specifically, and label your own acts as love.",
        ),
        insight(
            "words_of_affirmation", "receiving_gifts",
            "Cards with real messages inside hit both of you at once.",
            "One wonders why a present needs a speech; the other why a speech needs a present.",
            "Attach a few honest sentences to every gift, however small, in both directions.",
        ),
        insight(
            "words_of_affirmation", "physical_touch",
            "Reassurance flows easily: a kind sentence and a squeeze of the hand cost nothing.",
            "In conflict one withdraws words and the other withdraws touch, doubling the distance.",
            "Repair with both channels together: say the sentence while holding on.",
        ),
        insight(
            "quality_time", "quality_time",
            "Protecting time together is instinctive for both of you.",
            "Shared time can slide into parallel scrolling that counts for neither of you.",
            "Distinguish 'together in the room' from 'together'; plan one undistracted block a week.",
        ),
        insight(
            "quality_time", "acts_of_service",
            "Doing things side by side, errands included, doubles as connection for this pairing.",
            "One partner busy 'helping' can feel absent to the one who just wants them to sit down.",
            "Turn service into shared time: cook, fix, and fold together rather than in shifts.",
        ),
        insight(
            "quality_time", "receiving_gifts",
            "Planned experiences, tickets, trips, reservations, satisfy both languages at once.",
            "A gift handed over in a rush can land worse than no gift for the time-oriented partner.",
            "Prefer experience gifts over objects, and present them with the calendar already cleared.",
        ),
        insight(
            "quality_time", "physical_touch",
            "Unhurried evenings close together are exactly what both of you are asking for.",
            "Touch without attention, or attention without closeness, leaves one of you short.",
            "Default to the couch over the group outing when the week has been thin on connection.",
        ),
        insight(
            "acts_of_service", "acts_of_service",
            "You run a household like a pit crew; load-sharing is your native romance.",
            "Scorekeeping sneaks in when both partners measure love in completed tasks.",
            "Trade lists weekly so each of you serves where it is actually felt, not just seen.",
        ),
        insight(
            "acts_of_service", "receiving_gifts",
            "Thoughtful logistics and thoughtful objects both say 'I was thinking of you today.'",
            "The server may dismiss presents as clutter while their partner treasures the token.",
            "Let some acts produce artifacts: the fixed shelf plus the flowers on it.",
        ),
        insight(
            "acts_of_service", "physical_touch",
            "Quiet devotion suits you both; neither needs an audience to feel loved.",
            "The helper can stay so busy that the toucher feels held by the house, not the person.",
            "End finished chores with contact: a hug when the dishes are done, not just the next task.",
        ),
        insight(
            "receiving_gifts", "receiving_gifts",
            "Anniversaries and small surprises are safe in this house; you both keep the receipts of love.",
            "Escalating or mismatched gift effort turns tokens into tallies.",
            "Agree on occasions and rough scale, then compete on thoughtfulness instead of price.",
        ),
        insight(
            "receiving_gifts", "physical_touch",
            "Tangible love is your common ground, in objects and in arms.",
            "A present without warmth, or an embrace on an empty anniversary, reads as half the message.",
            "Deliver gifts in person and up close; the handover is part of the gift.",
        ),
        insight(
            "physical_touch", "physical_touch",
            "Affection is frictionless; you recharge each other without a word.",
            "When one pulls away to cool off, the other can read ordinary distance as rejection.",
            "Agree on a minimal signal, a hand on the shoulder, that stays available even mid-argument.",
        ),
    ]
    .into_iter()
    .collect()
});

static ATTACHMENT_INSIGHTS: Lazy<InsightTable> = Lazy::new(|| {
    // C(4,2) + 4 = 10 entries.
    [
        insight(
            "secure", "secure",
            "Conflict stays a conversation; neither of you treats a bad day as a verdict on the relationship.",
            "Comfort can drift into autopilot, with closeness assumed rather than made.",
            "Schedule novelty on purpose; security is the launchpad, not the destination.",
        ),
        insight(
            "secure", "anxious",
            "Steady reassurance from one side gives the anxious partner room to settle.",
            "The secure partner may under-signal, reading as distance where none is meant.",
            "Over-communicate the boring facts: where you are, when you're back, that nothing is wrong.",
        ),
        insight(
            "secure", "avoidant",
            "Respected space plus reliable warmth lets the avoidant partner approach at their own pace.",
            "The secure partner may mistake self-sufficiency for disinterest and stop reaching.",
            "Keep invitations open-ended and low-pressure; let 'not now' mean 'later', not 'never'.",
        ),
        insight(
            "secure", "fearful",
            "A consistent partner gives the fearful one a live counterexample to old alarms.",
            "Hot-and-cold cycles can wear down even a steady partner's patience.",
            "Name the pattern together when calm, so the next swing is weather, not a crisis.",
        ),
        insight(
            "anxious", "anxious",
            "You never have to explain why reassurance matters; you both speak fluent check-in.",
            "Two alarm systems can set each other off, spiraling worry over small silences.",
            "Agree on concrete reassurance rituals so comfort doesn't depend on mind-reading.",
        ),
        insight(
            "anxious", "avoidant",
            "Each of you carries what the other under-practices: reaching out, and self-containment.",
            "The classic pursue-withdraw loop: one moves closer, the other steps back, repeat.",
            "Trade protocols: a guaranteed response window for the anxious, guaranteed solo time for the avoidant.",
        ),
        insight(
            "anxious", "fearful",
            "Both of you feel attachment at full volume and recognize the fear under the reaction.",
            "One's pursuit can trigger the other's retreat, reading as confirmation of worst fears.",
            "Slow the cycle with named time-outs that come with a fixed reunion time.",
        ),
        insight(
            "avoidant", "avoidant",
            "Mutual respect for autonomy; nobody smothers anybody here.",
            "Two people skilled at needing nothing can drift into roommates with history.",
            "Put vulnerability on the calendar: one real conversation a week, initiated in turns.",
        ),
        insight(
            "avoidant", "fearful",
            "Both understand the urge to protect yourself by stepping back.",
            "Two retreat instincts mean conflicts can dissolve unresolved rather than repaired.",
            "Designate a re-opener: whoever withdrew first names the topic again within two days.",
        ),
        insight(
            "fearful", "fearful",
            "You each know intimately how wanting and fearing closeness can coexist.",
            "Mirrored push-pull can make the relationship feel permanently provisional.",
            "Build micro-trust: small kept promises, logged and acknowledged, beat grand gestures.",
        ),
    ]
    .into_iter()
    .collect()
});

static ENNEAGRAM_INSIGHTS: Lazy<InsightTable> = Lazy::new(|| {
    // C(9,2) + 9 = 45 entries.
    [
        insight("type_1", "type_1",
            "Shared standards: you build a principled, reliable life without negotiating the basics.",
            "Two inner critics can merge into one loud house critic.",
            "Institute 'good enough' zones where neither of you is allowed to improve anything."),
        insight("type_1", "type_2",
            "Conscience meets care: you improve the world and warm it at the same time.",
            "The One critiques how the Two helps; the Two feels graded on generosity.",
            "Thank before you refine: appreciation first, suggestions only on request."),
        insight("type_1", "type_3",
            "Discipline plus drive; together you finish what you start, properly.",
            "Doing it right collides with doing it fast and visibly.",
            "Agree per project whether the goal is excellence or shipping, and say it out loud."),
        insight("type_1", "type_4",
            "Integrity meets depth: one keeps the form, the other keeps the feeling.",
            "The One hears moods as inconsistency; the Four hears standards as coldness.",
            "Treat emotions as data, not errors; treat routines as containers, not cages."),
        insight("type_1", "type_5",
            "Rigor on both sides; your decisions are researched and principled.",
            "Both can retreat into being right instead of being close.",
            "Close debates with a feeling check: 'and how are we?' after 'who's correct?'"),
        insight("type_1", "type_6",
            "Duty and loyalty: you keep promises and each other's backs.",
            "Rules versus worries can loop into joint overthinking.",
            "Cap deliberation: decide by a deadline, then back the call together."),
        insight("type_1", "type_7",
            "The One gives the Seven's ideas structure; the Seven gives the One's life color.",
            "Spontaneity reads as irresponsibility; planning reads as a cage.",
            "Schedule the fun; the One relaxes inside a plan and the Seven still gets the adventure."),
        insight("type_1", "type_8",
            "Two straight-shooters; where you agree, things actually happen.",
            "Righteous conviction against raw force makes for loud stalemates.",
            "Fight the problem, not each other: write the shared goal down before arguing the method."),
        insight("type_1", "type_9",
            "The Nine softens the One's edges; the One gives the Nine direction.",
            "Nagging meets stonewalling: pressure makes the Nine slower, not faster.",
            "Swap the critique for a request, and the silence for a stated preference."),
        insight("type_2", "type_2",
            "A generous household; care flows before anyone asks.",
            "Both give to be loved and neither admits a need, so resentment compounds quietly.",
            "Practice receiving: each week, one direct ask each, honored without reciprocation math."),
        insight("type_2", "type_3",
            "Warmth plus ambition: a supportive engine room behind a shining public life.",
            "The Two supports the image and then feels invisible behind it.",
            "Celebrate the supporter on the record; put the helper in the highlight reel."),
        insight("type_2", "type_4",
            "Emotional fluency on both sides; feelings get named, not buried.",
            "The Two fixes feelings the Four wants witnessed, not fixed.",
            "Ask 'comfort or company?' before helping."),
        insight("type_2", "type_5",
            "Care meets clarity: one tends the relationship, the other keeps it sane.",
            "The Two's approach feels like intrusion; the Five's retreat feels like rejection.",
            "Put warmth on a timer and solitude on the calendar, both guilt-free."),
        insight("type_2", "type_6",
            "Devotion squared: you show up for each other in every crisis.",
            "Anxious care-taking can become mutual surveillance of moods.",
            "Reassure once, then trust it; repeat-checking feeds the worry it means to soothe."),
        insight("type_2", "type_7",
            "Generosity and enthusiasm make yours the house people love to visit.",
            "The Two plans around people, the Seven around possibilities; someone's party gets missed.",
            "Protect a people-free, plan-free evening that belongs to just the two of you."),
        insight("type_2", "type_8",
            "Softness guarding strength and strength guarding softness; fiercely loyal both ways.",
            "The Eight's bluntness bruises; the Two's indirectness frustrates.",
            "Trade translations: the Two says it plainly, the Eight says it gently, once a day."),
        insight("type_2", "type_9",
            "Easy kindness; neither of you keeps score in daily life.",
            "Two accommodators means nobody states the actual preference.",
            "Alternate who chooses, and the chooser must name a real first choice."),
        insight("type_3", "type_3",
            "A power couple by default: goals get set, met, and exceeded.",
            "The relationship itself can become another project with KPIs instead of intimacy.",
            "Keep one domain metric-free; success there is measured in nothing."),
        insight("type_3", "type_4",
            "Polish meets authenticity: one knows how it should look, the other how it should feel.",
            "Image versus depth: the Four calls the Three fake, the Three calls the Four impractical.",
            "Share the unedited version first with each other, before the public cut."),
        insight("type_3", "type_5",
            "Competence is the shared love language; you respect each other's craft.",
            "Networking energy against hermit energy splits the calendar.",
            "Pick joint appearances sparingly and debrief at home, the Five's favorite part."),
        insight("type_3", "type_6",
            "Drive with due diligence: the Six stress-tests what the Three launches.",
            "Optimistic spin meets worst-case audit; both feel undermined.",
            "Frame doubts as support for the goal, and treat them as free consulting."),
        insight("type_3", "type_7",
            "High-energy optimism; you make ambitious plans look fun.",
            "Two momentum machines, no brakes: commitments multiply past capacity.",
            "Adopt a one-in-one-out rule for projects and keep weekends ballast-free."),
        insight("type_3", "type_8",
            "Executive force twice over; obstacles get flattened.",
            "Competition sneaks into the partnership: who leads, who wins, who decides.",
            "Divide kingdoms clearly and be each other's one safe place to lose."),
        insight("type_3", "type_9",
            "The Nine gives the Three a rest stop; the Three gives the Nine traction.",
            "The Three's pace reads as pressure; the Nine's pace reads as stalling.",
            "Set gentle deadlines together and honor the slow evenings as achievements too."),
        insight("type_4", "type_4",
            "Rare depth: you meet each other at emotional altitudes most couples never visit.",
            "Two moody weather systems can storm at once with no lighthouse.",
            "Keep mundane anchors, groceries, walks, bedtimes, that don't depend on mood."),
        insight("type_4", "type_5",
            "Intensity meets insight; your conversations go all the way down.",
            "The Four wants emotional presence the Five rations; withdrawal triggers abandonment.",
            "Exchange signals: the Five names a return time, the Four banks the reunion."),
        insight("type_4", "type_6",
            "Loyal to each other's complicated insides; neither expects simple.",
            "Imagined catastrophes, emotional and practical, can feed each other.",
            "Reality-test aloud together: what do we actually know right now?"),
        insight("type_4", "type_7",
            "Depth and delight take turns; your life together is never beige.",
            "The Seven reframes pain the Four needs felt; the Four deepens moods the Seven flees.",
            "Let sadness have its hour before the silver lining, and joy its hour before the critique."),
        insight("type_4", "type_8",
            "Passion recognizes passion; both of you bring full intensity.",
            "Volcanic conflict: hurt feelings meet blunt force.",
            "Agree that volume is not the measure of truth; revisit hot topics cold."),
        insight("type_4", "type_9",
            "The Nine's calm holds the Four's storms without flinching.",
            "The Four pokes for a reaction; the Nine numbs out to keep the peace.",
            "The Nine practices one honest pushback; the Four thanks them for it every time."),
        insight("type_5", "type_5",
            "Two quiet worlds with mutual visas; solitude together is your art form.",
            "Parallel lives can go so parallel they stop intersecting.",
            "Share one discovery a day out loud; curiosity is your bridge."),
        insight("type_5", "type_6",
            "Analysis plus vigilance; little blindsides this pair.",
            "Research loops and doubt loops can defer every decision.",
            "Assign decision owners: one researches, the other decides, alternating."),
        insight("type_5", "type_7",
            "The Five deepens what the Seven discovers; ideas are your shared playground.",
            "Input overload for one is Tuesday for the other.",
            "The Seven picks the adventure, the Five picks the exit time, both are binding."),
        insight("type_5", "type_8",
            "Strategy and force; the Eight acts on what the Five sees.",
            "The Eight's push feels invasive; the Five's wall feels like defiance.",
            "Knock first, answer eventually: requests over demands, responses over silence."),
        insight("type_5", "type_9",
            "Low-demand peace; you give each other acres of room.",
            "So much room that needs, and sometimes the relationship, go unstated.",
            "Hold a short weekly sync where each names one want; no deflection allowed."),
        insight("type_6", "type_6",
            "Trust built brick by brick, and loyalty that survives real storms.",
            "Shared anxiety amplifies; you can talk each other into the ditch.",
            "Nominate a rotating 'calm officer' who argues the likely case, not the worst case."),
        insight("type_6", "type_7",
            "The Six grounds the Seven's flights; the Seven lightens the Six's weather.",
            "Reassurance-seeking meets commitment-dodging at the worst moments.",
            "Make plans with built-in flexibility: booked, but changeable by agreement."),
        insight("type_6", "type_8",
            "The Eight's certainty is shelter for the Six; the Six's loyalty is rare fuel for the Eight.",
            "Testing loyalty versus demanding it can spark standoffs.",
            "Say the suspicion plainly once, answer it plainly once, then drop it."),
        insight("type_6", "type_9",
            "Steady and steadying; home is genuinely safe here.",
            "The Six's alarms meet the Nine's snooze button; urgency never aligns.",
            "Rank worries together: the top one gets action today, the rest get Tuesday."),
        insight("type_7", "type_7",
            "Double the ideas, double the laughter; boredom is extinct.",
            "Escape velocity from every discomfort, including the ones that needed facing.",
            "Take turns being the one who stays with the hard topic for ten more minutes."),
        insight("type_7", "type_8",
            "Big appetite for life on both sides; you go further together than apart.",
            "Two accelerators, no steering margin: impulsive calls compound.",
            "Institute a 24-hour rule on big commitments; enthusiasm keeps, overnight."),
        insight("type_7", "type_9",
            "Easygoing joy; the Seven supplies sparks, the Nine supplies glow.",
            "Avoidance squared: conflict gets outrun or slept on, never finished.",
            "End disagreements with one concrete next step, written where both can see it."),
        insight("type_8", "type_8",
            "Total candor and total backup; you never wonder where you stand.",
            "Two non-negotiators sharing one household ledger of control.",
            "Divide final say by domain, and practice conceding once a month on purpose."),
        insight("type_8", "type_9",
            "The classic anchor pairing: force meets patience, and both soften.",
            "The Nine's merging reads as agreement until the buried 'no' surfaces late.",
            "The Eight asks twice; the Nine answers honestly the first time."),
        insight("type_9", "type_9",
            "Deep mutual acceptance; neither of you has to perform.",
            "Two peacekeepers can let everything important stay comfortably unsaid.",
            "Keep a shared list of postponed topics and retire one per week, gently."),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::typology_definition;

    #[test]
    fn test_table_sizes() {
        assert_eq!(LOVE_LANGUAGE_INSIGHTS.len(), 15);
        assert_eq!(ATTACHMENT_INSIGHTS.len(), 10);
        assert_eq!(ENNEAGRAM_INSIGHTS.len(), 45);
    }

    #[test]
    fn test_keys_are_canonical_and_valid() {
        for typology in [TypologyId::LoveLanguage, TypologyId::Attachment, TypologyId::Enneagram] {
            let definition = typology_definition(typology);
            for (a, b) in insight_table(typology).keys() {
                assert!(a <= b, "{}: key ({}, {}) not sorted", typology, a, b);
                assert!(definition.contains_category(a), "{}: unknown category {}", typology, a);
                assert!(definition.contains_category(b), "{}: unknown category {}", typology, b);
            }
        }
    }

    #[test]
    fn test_copy_is_filled_in() {
        for typology in [TypologyId::LoveLanguage, TypologyId::Attachment, TypologyId::Enneagram] {
            for insight in insight_table(typology).values() {
                assert!(!insight.strength.is_empty());
                assert!(!insight.friction.is_empty());
                assert!(!insight.growth_tip.is_empty());
            }
        }
    }
}
