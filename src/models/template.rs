/// Supported (form_type, region_code, language_code) combinations and the
/// pre-approved provider template each one selects. Fixed at build time;
/// an unmatched combination is rejected, never defaulted.
const EMAIL_TEMPLATES: &[((&str, &str, &str), &str)] = &[
    (("H", "GB-ENG", "en"), "0c5a4f95-bfa4-4364-9394-8499b4d777d5"),
    (("H", "GB-WLS", "en"), "9b710897-6bf1-45ae-90ef-dfa94b09e12f"),
    (("H", "GB-WLS", "cy"), "e912d926-131e-4a3d-9f39-9ba2f860cbd4"),
    (("H", "GB-NIR", "en"), "f19f358e-791c-4952-ae2d-f451ce65f25a"),
    (("H", "GB-NIR", "ga"), "d0ec67f8-8028-41e7-9cc5-9a3261c31e84"),
    (("H", "GB-NIR", "eo"), "3c2eae58-1b55-4f14-ba86-6a04bb3fe21d"),
    (("I", "GB-ENG", "en"), "2566f8c6-c3b8-42e8-9d48-7efcd4e0b9a4"),
    (("I", "GB-WLS", "en"), "70a1fd46-8c87-4bd8-aebc-2f5b02d95a29"),
    (("I", "GB-WLS", "cy"), "4c358a8e-6e29-4d9c-8d41-2a7f5c5a9d6b"),
    (("I", "GB-NIR", "en"), "5a6e1cc1-4cbf-47d6-b5ef-baf4f13322ab"),
    (("I", "GB-NIR", "ga"), "7d2bd6a3-0c52-4c6f-9d7e-b4efc7b8a140"),
    (("I", "GB-NIR", "eo"), "8f1c1b84-e3a7-4f0d-8eab-5ce5e11cf2d9"),
    (("C", "GB-ENG", "en"), "b2b1a7c5-6a2f-4b0e-9c3d-1f2e8d4a5b6c"),
    (("C", "GB-WLS", "en"), "6f3a9bd2-58e4-4c21-b7a9-3d0c8e5f1a47"),
    (("C", "GB-WLS", "cy"), "1d8e4f6a-9c3b-4e57-af28-7b5d2c9e0f13"),
];

pub fn template_id(
    form_type: &str,
    region_code: &str,
    language_code: &str,
) -> Option<&'static str> {
    EMAIL_TEMPLATES
        .iter()
        .find(|((form, region, language), _)| {
            *form == form_type && *region == region_code && *language == language_code
        })
        .map(|(_, id)| *id)
}
