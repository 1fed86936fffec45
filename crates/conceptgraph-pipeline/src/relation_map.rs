//! Curated verbose-to-concise relation mappings for the rule-based label
//! simplifier. Declaration order is significant: substring replacement takes
//! the first key whose space-joined form occurs in the label, not the best
//! match. Keys use underscores; they are compared space-joined after label
//! normalization.

pub static RELATION_MAP: &[(&str, &str)] = &[
    // Association
    ("is_associated_with", "links"),
    ("has_relationship_with", "links"),
    ("is_correlated_with", "links"),
    ("is_connected_to", "links"),
    ("is_linked_to", "links"),
    ("is_related_to", "relates"),
    ("relates_to", "relates"),
    ("corresponds_to", "matches"),
    ("interacts_with", "engages"),
    // Dependency
    ("is_dependent_on", "needs"),
    ("depends_on", "needs"),
    ("relies_on", "needs"),
    ("is_required_by", "supports"),
    ("is_required_for", "enables"),
    ("is_needed_for", "enables"),
    ("is_a_prerequisite_for", "precedes"),
    // Composition and membership
    ("is_a_component_of", "belongs"),
    ("is_component_of", "belongs"),
    ("is_a_part_of", "belongs"),
    ("is_part_of", "belongs"),
    ("belongs_to", "belongs"),
    ("is_a_member_of", "belongs"),
    ("is_contained_in", "inside"),
    ("is_included_in", "inside"),
    ("is_comprised_of", "comprises"),
    ("is_composed_of", "comprises"),
    ("is_made_up_of", "comprises"),
    ("is_made_of", "comprises"),
    ("consists_of", "comprises"),
    // Taxonomy
    ("is_an_instance_of", "is"),
    ("is_an_example_of", "is"),
    ("is_a_subclass_of", "is"),
    ("is_a_type_of", "is"),
    ("is_a_kind_of", "is"),
    ("is_a_form_of", "is"),
    ("is_classified_as", "is"),
    ("is_categorized_as", "is"),
    // Definition and naming
    ("is_defined_as", "means"),
    ("is_described_as", "means"),
    ("is_referred_to_as", "named"),
    ("is_known_as", "named"),
    ("is_called", "named"),
    // Usage and capability
    ("is_utilized_by", "serves"),
    ("is_used_by", "serves"),
    ("is_used_for", "serves"),
    ("is_used_in", "serves"),
    ("makes_use_of", "uses"),
    ("is_responsible_for", "handles"),
    ("is_in_charge_of", "handles"),
    ("takes_care_of", "handles"),
    ("has_the_ability_to", "can"),
    ("is_capable_of", "can"),
    ("is_able_to", "can"),
    // Causality
    ("gives_rise_to", "causes"),
    ("brings_about", "causes"),
    ("results_in", "causes"),
    ("leads_to", "causes"),
    ("is_a_consequence_of", "follows"),
    ("is_a_result_of", "follows"),
    ("is_caused_by", "follows"),
    ("originates_from", "follows"),
    ("stems_from", "follows"),
    ("arises_from", "follows"),
    ("is_derived_from", "derives"),
    ("derives_from", "derives"),
    ("comes_from", "derives"),
    // Elaboration
    ("is_an_extension_of", "extends"),
    ("is_built_on", "extends"),
    ("builds_upon", "extends"),
    ("builds_on", "extends"),
    ("is_based_on", "extends"),
    ("expands_on", "extends"),
    ("elaborates_on", "explains"),
    ("provides_information_about", "describes"),
    ("gives_details_about", "describes"),
    ("tells_about", "describes"),
    ("is_concerned_with", "concerns"),
    ("pertains_to", "concerns"),
    ("deals_with", "concerns"),
    ("is_about", "concerns"),
    // Influence
    ("has_an_effect_on", "affects"),
    ("has_an_impact_on", "affects"),
    ("has_influence_on", "affects"),
    ("exerts_influence_on", "affects"),
    ("impacts_on", "affects"),
    ("acts_on", "affects"),
    ("is_influenced_by", "reacts"),
    ("is_affected_by", "reacts"),
    ("is_impacted_by", "reacts"),
    ("contributes_to", "aids"),
    ("adds_to", "aids"),
    ("is_beneficial_for", "helps"),
    ("is_helpful_for", "helps"),
    ("assists_with", "helps"),
    ("assists_in", "helps"),
    ("helps_with", "helps"),
    ("provides_support_for", "supports"),
    ("gives_support_to", "supports"),
    ("is_supported_by", "uses"),
    ("is_in_favor_of", "supports"),
    // Opposition and comparison
    ("works_against", "opposes"),
    ("is_opposed_to", "opposes"),
    ("goes_against", "opposes"),
    ("is_in_conflict_with", "conflicts"),
    ("conflicts_with", "conflicts"),
    ("is_in_competition_with", "rivals"),
    ("competes_with", "rivals"),
    ("is_analogous_to", "mirrors"),
    ("is_comparable_to", "mirrors"),
    ("is_similar_to", "mirrors"),
    ("is_equivalent_to", "equals"),
    ("is_the_same_as", "equals"),
    ("is_identical_to", "equals"),
    ("is_different_from", "differs"),
    ("is_distinct_from", "differs"),
    ("differs_from", "differs"),
    ("is_the_opposite_of", "contrasts"),
    ("contrasts_with", "contrasts"),
    // Location and time
    ("is_situated_in", "occupies"),
    ("is_located_in", "occupies"),
    ("is_found_in", "occupies"),
    ("resides_in", "occupies"),
    ("exists_in", "occupies"),
    ("takes_place_in", "occurs"),
    ("happens_in", "occurs"),
    ("occurs_in", "occurs"),
    ("takes_place_during", "spans"),
    ("occurs_during", "spans"),
    ("happens_during", "spans"),
    ("is_followed_by", "precedes"),
    ("is_succeeded_by", "precedes"),
    ("comes_before", "precedes"),
    ("is_preceded_by", "trails"),
    ("comes_after", "trails"),
    // Transformation
    ("is_transformed_into", "becomes"),
    ("is_converted_to", "becomes"),
    ("transforms_into", "becomes"),
    ("develops_into", "becomes"),
    ("evolves_into", "becomes"),
    ("changes_into", "becomes"),
    ("converts_to", "becomes"),
    ("turns_into", "becomes"),
    // Communication and measurement
    ("exchanges_information_with", "talks"),
    ("communicates_with", "talks"),
    ("sends_information_to", "informs"),
    ("sends_data_to", "feeds"),
    ("provides_data_to", "feeds"),
    ("receives_data_from", "reads"),
    ("receives_information_from", "learns"),
    ("gets_information_from", "learns"),
    ("is_quantified_by", "measures"),
    ("is_measured_by", "measures"),
    ("is_measured_in", "measures"),
    ("is_characterized_by", "shows"),
    ("is_distinguished_by", "shows"),
    ("is_identified_by", "shows"),
    ("is_marked_by", "shows"),
];
