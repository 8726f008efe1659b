//! One builder per schema.org type.
//!
//! Builders are pure: they map an input record onto a [`StructuredData`]
//! document. Only the FAQ and breadcrumb builders can fail, and only on an
//! empty list.

use super::{
    Schema, SchemaError, StructuredData,
    input::{
        ArticleInput, CourseInput, FaqItem, HowToInput, ItemListInput, LearningResourceInput,
        LocalBusinessInput, OrganizationInput, ServiceInput, WebSiteInput,
    },
    types::{
        Article, BreadcrumbList, ContactPoint, Course, FaqPage, GeoCoordinates, HowTo, HowToItem,
        HowToStep, ImageObject, ItemList, LearningResource, ListItem, LocalBusiness,
        MonetaryAmount, Offer, Organization, OrganizationRef, Person, PostalAddress, Question,
        SearchAction, Service, WebPageRef, WebSite,
    },
};
use crate::{
    config::defaults,
    data::{AuthorRecord, BreadcrumbItem},
};

/// ISO-8601 duration for a number of minutes: `15` → `PT15M`.
pub fn iso_duration_minutes(minutes: u32) -> String {
    format!("PT{minutes}M")
}

/// The site organization, attached to every article as publisher.
pub fn site_publisher() -> OrganizationRef {
    OrganizationRef::new(defaults::site::NAME, defaults::site::URL).with_logo(defaults::site::LOGO)
}

fn person(author: &AuthorRecord) -> Person {
    let mut person = Person::new(&author.name);
    person.url.clone_from(&author.url);
    person.image.clone_from(&author.image);
    person.description.clone_from(&author.description);
    person
}

fn join_keywords(keywords: &[String]) -> Option<String> {
    (!keywords.is_empty()).then(|| keywords.join(", "))
}

pub fn organization(input: &OrganizationInput) -> StructuredData {
    let contact_point = input.contact_point.as_ref().map(|cp| {
        let mut point = ContactPoint::new(&cp.contact_type);
        point.telephone.clone_from(&cp.telephone);
        point.email.clone_from(&cp.email);
        point.area_served.clone_from(&cp.area_served);
        point.available_language.clone_from(&cp.available_language);
        point
    });

    StructuredData::new(Schema::Organization(Organization {
        name: input.name.clone(),
        url: input.url.clone(),
        description: input.description.clone(),
        logo: input.logo.as_deref().map(ImageObject::new),
        contact_point,
        same_as: input.same_as.clone(),
    }))
}

pub fn article(input: &ArticleInput) -> StructuredData {
    StructuredData::new(Schema::Article(Article {
        headline: input.headline.clone(),
        description: input.description.clone(),
        url: input.url.clone(),
        date_published: input.date_published.clone(),
        date_modified: input
            .date_modified
            .clone()
            .unwrap_or_else(|| input.date_published.clone()),
        author: input.author.as_ref().map(person),
        publisher: site_publisher(),
        main_entity_of_page: WebPageRef::new(&input.url),
        image: input.image.clone(),
        article_section: input.category.clone(),
        keywords: join_keywords(&input.keywords),
        word_count: input.word_count,
    }))
}

pub fn course(input: &CourseInput) -> StructuredData {
    StructuredData::new(Schema::Course(Course {
        name: input.name.clone(),
        description: input.description.clone(),
        url: input.url.clone(),
        provider: OrganizationRef::new(&input.provider.name, &input.provider.url),
        instructor: input.instructor.as_ref().map(person),
        date_published: input.date_published.clone(),
        date_modified: input.date_modified.clone(),
        educational_level: input.difficulty.map(|d| d.as_str().to_owned()),
        time_required: input.duration_minutes.map(iso_duration_minutes),
        about: input.category.clone(),
        keywords: join_keywords(&input.keywords),
        course_prerequisites: input.prerequisites.clone(),
        teaches: input.teaches.clone(),
        in_language: "en-US".into(),
        is_accessible_for_free: true,
    }))
}

/// `FAQPage` with one question per entry, order preserved.
pub fn faq(items: &[FaqItem]) -> Result<StructuredData, SchemaError> {
    if items.is_empty() {
        return Err(SchemaError::MissingFaqData);
    }
    let main_entity = items
        .iter()
        .map(|item| Question::new(&item.question, &item.answer))
        .collect();
    Ok(StructuredData::new(Schema::FaqPage(FaqPage { main_entity })))
}

/// `BreadcrumbList`; supplied positions are kept as-is.
pub fn breadcrumb(items: &[BreadcrumbItem]) -> Result<StructuredData, SchemaError> {
    if items.is_empty() {
        return Err(SchemaError::MissingBreadcrumbData);
    }
    let item_list_element = items
        .iter()
        .map(|item| ListItem::crumb(item.position, &item.name, &item.url))
        .collect();
    Ok(StructuredData::new(Schema::BreadcrumbList(BreadcrumbList {
        item_list_element,
    })))
}

pub fn website(input: &WebSiteInput) -> StructuredData {
    StructuredData::new(Schema::WebSite(WebSite {
        name: input.name.clone(),
        url: input.url.clone(),
        description: input.description.clone(),
        potential_action: input
            .search
            .as_ref()
            .map(|search| SearchAction::new(&search.target, &search.query_param)),
    }))
}

pub fn local_business(input: &LocalBusinessInput) -> StructuredData {
    let address = input.address.as_ref().map(|a| {
        PostalAddress::new(&a.street, &a.locality, &a.region, &a.postal_code, &a.country)
    });

    StructuredData::new(Schema::LocalBusiness(LocalBusiness {
        name: input.name.clone(),
        description: input.description.clone(),
        url: input.url.clone(),
        telephone: input.telephone.clone(),
        email: input.email.clone(),
        image: input.image.clone(),
        address,
        geo: input.geo.map(|(lat, lng)| GeoCoordinates::new(lat, lng)),
        opening_hours: input.opening_hours.clone(),
        price_range: input.price_range.clone(),
    }))
}

pub fn service(input: &ServiceInput) -> StructuredData {
    StructuredData::new(Schema::Service(Service {
        name: input.name.clone(),
        description: input.description.clone(),
        provider: OrganizationRef::new(&input.provider.name, &input.provider.url),
        service_type: input.service_type.clone(),
        area_served: input.area_served.clone(),
        url: input.url.clone(),
        offers: input
            .offer
            .as_ref()
            .map(|offer| Offer::new(offer.price, &offer.currency)),
    }))
}

/// Steps are numbered from 1 in the order given.
pub fn how_to(input: &HowToInput) -> StructuredData {
    let step = input
        .steps
        .iter()
        .zip(1u32..)
        .map(|(s, position)| {
            let mut step = HowToStep::new(position, &s.name, &s.text);
            step.url.clone_from(&s.url);
            step.image.clone_from(&s.image);
            step
        })
        .collect();

    StructuredData::new(Schema::HowTo(HowTo {
        name: input.name.clone(),
        description: input.description.clone(),
        image: input.image.clone(),
        total_time: input.total_time_minutes.map(iso_duration_minutes),
        estimated_cost: input.estimated_cost.map(MonetaryAmount::usd),
        supply: input.supplies.iter().map(HowToItem::supply).collect(),
        tool: input.tools.iter().map(HowToItem::tool).collect(),
        step,
    }))
}

pub fn learning_resource(input: &LearningResourceInput) -> StructuredData {
    StructuredData::new(Schema::LearningResource(LearningResource {
        name: input.name.clone(),
        description: input.description.clone(),
        url: input.url.clone(),
        learning_resource_type: input.resource_type.clone(),
        educational_level: input.educational_level.map(|d| d.as_str().to_owned()),
        time_required: input.time_required_minutes.map(iso_duration_minutes),
        teaches: input.teaches.clone(),
        keywords: join_keywords(&input.keywords),
        is_accessible_for_free: input.is_free,
    }))
}

pub fn item_list(input: &ItemListInput) -> StructuredData {
    let item_list_element: Vec<_> = input
        .items
        .iter()
        .zip(1u32..)
        .map(|(entry, position)| {
            let mut item = ListItem::entry(position, &entry.name, &entry.url);
            item.description.clone_from(&entry.description);
            item
        })
        .collect();

    StructuredData::new(Schema::ItemList(ItemList {
        name: input.name.clone(),
        description: input.description.clone(),
        number_of_items: item_list_element.len(),
        item_list_element,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::Difficulty,
        schema::{
            SCHEMA_CONTEXT, validate_structured_data,
            input::{
                AddressInput, ContactPointInput, HowToStepInput, ItemListEntry, OfferInput,
                ProviderInput, SearchActionInput,
            },
        },
    };
    use serde_json::{Value, json};

    fn to_json(doc: &StructuredData) -> Value {
        doc.to_value().unwrap()
    }

    fn sample_article() -> ArticleInput {
        ArticleInput {
            headline: "Picking Your First Truck".into(),
            description: "New versus used trucks".into(),
            url: "https://diyfoodtruckers.com/lessons/first-truck".into(),
            date_published: "2025-02-01T00:00:00Z".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_iso_duration_minutes() {
        assert_eq!(iso_duration_minutes(15), "PT15M");
        assert_eq!(iso_duration_minutes(0), "PT0M");
    }

    #[test]
    fn test_organization_full() {
        let doc = organization(&OrganizationInput {
            name: "DIY Food Truckers Union".into(),
            url: "https://diyfoodtruckers.com".into(),
            description: Some("Lessons for food truck owners".into()),
            logo: Some("https://diyfoodtruckers.com/logo.png".into()),
            contact_point: Some(ContactPointInput {
                contact_type: "customer support".into(),
                email: Some("hello@diyfoodtruckers.com".into()),
                available_language: vec!["English".into()],
                ..Default::default()
            }),
            same_as: vec!["https://discord.gg/foodtruckers".into()],
        });
        let json = to_json(&doc);

        assert_eq!(json["@context"], SCHEMA_CONTEXT);
        assert_eq!(json["@type"], "Organization");
        assert_eq!(json["logo"]["@type"], "ImageObject");
        assert_eq!(json["logo"]["url"], "https://diyfoodtruckers.com/logo.png");
        assert_eq!(json["contactPoint"]["@type"], "ContactPoint");
        assert_eq!(json["contactPoint"]["availableLanguage"], json!(["English"]));
        assert_eq!(json["sameAs"][0], "https://discord.gg/foodtruckers");
    }

    #[test]
    fn test_organization_minimal_omits_optionals() {
        let doc = organization(&OrganizationInput {
            name: "X".into(),
            url: "https://x.test".into(),
            ..Default::default()
        });
        let json = to_json(&doc);
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("logo"));
        assert!(!obj.contains_key("contactPoint"));
        assert!(!obj.contains_key("sameAs"));
    }

    #[test]
    fn test_article_defaults_modified_to_published() {
        let json = to_json(&article(&sample_article()));

        assert_eq!(json["@type"], "Article");
        assert_eq!(json["dateModified"], "2025-02-01T00:00:00Z");
        assert_eq!(json["publisher"]["@type"], "Organization");
        assert_eq!(json["publisher"]["name"], defaults::site::NAME);
        assert_eq!(json["publisher"]["logo"]["url"], defaults::site::LOGO);
        assert_eq!(
            json["mainEntityOfPage"]["@id"],
            "https://diyfoodtruckers.com/lessons/first-truck"
        );
    }

    #[test]
    fn test_article_maps_optional_fields() {
        let mut input = sample_article();
        input.date_modified = Some("2025-03-01T00:00:00Z".into());
        input.author = Some(AuthorRecord::named("Jordan"));
        input.category = Some("Getting Started".into());
        input.keywords = vec!["truck".into(), "buying".into()];
        input.word_count = Some(1200);
        let json = to_json(&article(&input));

        assert_eq!(json["dateModified"], "2025-03-01T00:00:00Z");
        assert_eq!(json["author"]["@type"], "Person");
        assert_eq!(json["author"]["name"], "Jordan");
        assert_eq!(json["articleSection"], "Getting Started");
        assert_eq!(json["keywords"], "truck, buying");
        assert_eq!(json["wordCount"], 1200);
    }

    #[test]
    fn test_course_fields() {
        let doc = course(&CourseInput {
            name: "Permits 101".into(),
            description: "Getting licensed".into(),
            url: "https://diyfoodtruckers.com/lessons/permits".into(),
            provider: ProviderInput {
                name: "DIY Food Truckers Union".into(),
                url: "https://diyfoodtruckers.com".into(),
            },
            difficulty: Some(Difficulty::Beginner),
            duration_minutes: Some(15),
            teaches: vec!["Apply for a permit".into()],
            prerequisites: vec!["None".into()],
            ..Default::default()
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "Course");
        assert_eq!(json["timeRequired"], "PT15M");
        assert_eq!(json["educationalLevel"], "beginner");
        assert_eq!(json["provider"]["@type"], "Organization");
        assert_eq!(json["teaches"], json!(["Apply for a permit"]));
        assert_eq!(json["coursePrerequisites"], json!(["None"]));
        assert_eq!(json["isAccessibleForFree"], true);
    }

    #[test]
    fn test_course_without_duration_omits_time_required() {
        let json = to_json(&course(&CourseInput::default()));
        assert!(json.get("timeRequired").is_none());
        assert!(json.get("teaches").is_none());
    }

    #[test]
    fn test_faq_empty_fails() {
        let err = faq(&[]).unwrap_err();
        assert!(err.to_string().contains("FAQ data is required"));
    }

    #[test]
    fn test_faq_preserves_order() {
        let doc = faq(&[
            FaqItem::new("First?", "One"),
            FaqItem::new("Second?", "Two"),
        ])
        .unwrap();
        let json = to_json(&doc);

        assert_eq!(json["@type"], "FAQPage");
        assert_eq!(json["mainEntity"][0]["name"], "First?");
        assert_eq!(json["mainEntity"][0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(json["mainEntity"][1]["acceptedAnswer"]["text"], "Two");
    }

    #[test]
    fn test_breadcrumb_empty_fails() {
        let err = breadcrumb(&[]).unwrap_err();
        assert!(matches!(err, SchemaError::MissingBreadcrumbData));
    }

    #[test]
    fn test_breadcrumb_keeps_supplied_positions() {
        let doc = breadcrumb(&[
            BreadcrumbItem::new("Home", "https://x.test/", 1),
            BreadcrumbItem::new("Deep", "https://x.test/deep", 5),
        ])
        .unwrap();
        let json = to_json(&doc);

        assert_eq!(json["@type"], "BreadcrumbList");
        assert_eq!(json["itemListElement"][1]["position"], 5);
        assert_eq!(json["itemListElement"][1]["item"], "https://x.test/deep");
    }

    #[test]
    fn test_website_search_action() {
        let doc = website(&WebSiteInput {
            name: "Site".into(),
            url: "https://x.test".into(),
            description: None,
            search: Some(SearchActionInput {
                target: "https://x.test/search?q={search_term_string}".into(),
                query_param: "search_term_string".into(),
            }),
        });
        let json = to_json(&doc);

        assert_eq!(json["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            json["potentialAction"]["target"],
            "https://x.test/search?q={search_term_string}"
        );
        assert_eq!(
            json["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn test_local_business_address_and_geo() {
        let doc = local_business(&LocalBusinessInput {
            name: "Taco Truck".into(),
            description: "Tacos".into(),
            url: "https://tacos.test".into(),
            address: Some(AddressInput {
                street: "1 Main St".into(),
                locality: "Austin".into(),
                region: "TX".into(),
                postal_code: "78701".into(),
                country: "US".into(),
            }),
            geo: Some((30.27, -97.74)),
            opening_hours: vec!["Mo-Fr 11:00-14:00".into()],
            ..Default::default()
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "LocalBusiness");
        assert_eq!(json["address"]["@type"], "PostalAddress");
        assert_eq!(json["address"]["addressLocality"], "Austin");
        assert_eq!(json["geo"]["latitude"], 30.27);
        assert_eq!(json["openingHours"][0], "Mo-Fr 11:00-14:00");
    }

    #[test]
    fn test_service_offer() {
        let doc = service(&ServiceInput {
            name: "Menu review".into(),
            description: "We review your menu".into(),
            provider: ProviderInput {
                name: "Union".into(),
                url: "https://x.test".into(),
            },
            offer: Some(OfferInput {
                price: 49.0,
                currency: "USD".into(),
            }),
            ..Default::default()
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "Service");
        assert_eq!(json["offers"]["price"], "49.00");
        assert_eq!(json["offers"]["priceCurrency"], "USD");
    }

    #[test]
    fn test_how_to_numbers_steps_and_wraps_cost() {
        let doc = how_to(&HowToInput {
            name: "Clean the grill".into(),
            description: "End of shift cleaning".into(),
            total_time_minutes: Some(20),
            estimated_cost: Some(12.5),
            supplies: vec!["Degreaser".into()],
            tools: vec!["Scraper".into()],
            steps: vec![
                HowToStepInput {
                    name: "Scrape".into(),
                    text: "Scrape while warm".into(),
                    ..Default::default()
                },
                HowToStepInput {
                    name: "Wipe".into(),
                    text: "Wipe with degreaser".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "HowTo");
        assert_eq!(json["totalTime"], "PT20M");
        assert_eq!(json["estimatedCost"]["@type"], "MonetaryAmount");
        assert_eq!(json["estimatedCost"]["currency"], "USD");
        assert_eq!(json["estimatedCost"]["value"], 12.5);
        assert_eq!(json["supply"][0]["@type"], "HowToSupply");
        assert_eq!(json["tool"][0]["@type"], "HowToTool");
        assert_eq!(json["step"][0]["position"], 1);
        assert_eq!(json["step"][1]["position"], 2);
    }

    #[test]
    fn test_learning_resource() {
        let doc = learning_resource(&LearningResourceInput {
            name: "Startup checklist".into(),
            description: "Printable checklist".into(),
            url: "https://x.test/checklist".into(),
            resource_type: "Checklist".into(),
            educational_level: Some(Difficulty::Advanced),
            time_required_minutes: Some(5),
            is_free: true,
            ..Default::default()
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "LearningResource");
        assert_eq!(json["learningResourceType"], "Checklist");
        assert_eq!(json["educationalLevel"], "advanced");
        assert_eq!(json["timeRequired"], "PT5M");
        assert_eq!(json["isAccessibleForFree"], true);
    }

    #[test]
    fn test_item_list_positions() {
        let doc = item_list(&ItemListInput {
            name: "Lessons".into(),
            description: None,
            items: vec![
                ItemListEntry {
                    name: "A".into(),
                    url: "https://x.test/a".into(),
                    description: None,
                },
                ItemListEntry {
                    name: "B".into(),
                    url: "https://x.test/b".into(),
                    description: Some("second".into()),
                },
            ],
        });
        let json = to_json(&doc);

        assert_eq!(json["@type"], "ItemList");
        assert_eq!(json["numberOfItems"], 2);
        assert_eq!(json["itemListElement"][0]["position"], 1);
        assert_eq!(json["itemListElement"][1]["url"], "https://x.test/b");
        assert_eq!(json["itemListElement"][1]["description"], "second");
    }

    #[test]
    fn test_every_builder_output_validates() {
        let provider = ProviderInput {
            name: "DIY Food Truckers Union".into(),
            url: "https://diyfoodtruckers.com".into(),
        };
        let docs = vec![
            organization(&OrganizationInput {
                name: "DIY Food Truckers Union".into(),
                url: "https://diyfoodtruckers.com".into(),
                ..Default::default()
            }),
            article(&sample_article()),
            course(&CourseInput {
                name: "Permits 101".into(),
                description: "Which permits you need".into(),
                url: "https://diyfoodtruckers.com/getting-started/permits".into(),
                provider: provider.clone(),
                ..Default::default()
            }),
            faq(&[FaqItem::new("Is it free?", "Yes.")]).unwrap(),
            breadcrumb(&[BreadcrumbItem::new("Home", "https://diyfoodtruckers.com/", 1)]).unwrap(),
            website(&WebSiteInput {
                name: "DIY Food Truckers Union".into(),
                url: "https://diyfoodtruckers.com".into(),
                ..Default::default()
            }),
            local_business(&LocalBusinessInput {
                name: "Taco Truck".into(),
                description: "Tacos".into(),
                url: "https://tacos.test".into(),
                ..Default::default()
            }),
            service(&ServiceInput {
                name: "Menu review".into(),
                description: "We review your menu".into(),
                provider,
                ..Default::default()
            }),
            how_to(&HowToInput {
                name: "Clean the grill".into(),
                description: "End of shift cleaning".into(),
                ..Default::default()
            }),
            learning_resource(&LearningResourceInput {
                name: "Startup checklist".into(),
                description: "Printable checklist".into(),
                url: "https://x.test/checklist".into(),
                resource_type: "Checklist".into(),
                ..Default::default()
            }),
            item_list(&ItemListInput {
                name: "Lessons".into(),
                ..Default::default()
            }),
        ];

        let types: Vec<_> = docs.iter().map(StructuredData::type_name).collect();
        assert_eq!(
            types,
            vec![
                "Organization",
                "Article",
                "Course",
                "FAQPage",
                "BreadcrumbList",
                "WebSite",
                "LocalBusiness",
                "Service",
                "HowTo",
                "LearningResource",
                "ItemList",
            ]
        );
        for doc in &docs {
            let result = validate_structured_data(&to_json(doc));
            assert!(result.is_valid, "{}: {:?}", doc.type_name(), result.errors);
        }
    }
}
