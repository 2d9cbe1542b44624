//! Course shop: searchable, category-filtered catalog.

use leptos::prelude::*;
use records::course::{CATEGORIES, CatalogFilter, Course, SAMPLE_COURSES, format_price};

use crate::components::hero::{Hero, HeroStyle};
use crate::components::marketing_layout::MarketingLayout;
use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::ui::cn;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::default());
    let visible = Memo::new(move |_| filter.with(|f| f.apply(&SAMPLE_COURSES).into_iter().copied().collect::<Vec<_>>()));

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| f.search = value);
    };
    let clear = Callback::new(move |_| filter.update(CatalogFilter::clear));

    view! {
        <MarketingLayout>
            <Hero
                style=HeroStyle::Transparent
                title="Professional Development Courses"
                subtitle="Advance your career with expert-led training"
            />

            <section class="section">
                <div class="section__inner">
                    <div class="catalog__toolbar">
                        <div class="catalog__search">
                            <span class="catalog__search-icon">"🔍"</span>
                            <input
                                type="text"
                                class="input catalog__search-input"
                                placeholder="Search courses, instructors, or topics..."
                                prop:value=move || filter.with(|f| f.search.clone())
                                on:input=on_search
                            />
                        </div>
                        <div class="catalog__chips">
                            {CATEGORIES
                                .iter()
                                .map(|category| {
                                    let category = *category;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                let active = filter.with(|f| f.category == category);
                                                cn(&["chip", if active { "chip--active" } else { "" }])
                                            }
                                            on:click=move |_| filter.update(|f| f.category = category.to_owned())
                                        >
                                            {category}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <p class="catalog__count">
                        {move || format!("Showing {} of {} courses", visible.with(Vec::len), SAMPLE_COURSES.len())}
                    </p>

                    <div id="courses" class="catalog__grid">
                        <For each=move || visible.get() key=|course| course.id let:course>
                            <CourseCard course=course />
                        </For>
                    </div>

                    <Show when=move || visible.with(Vec::is_empty)>
                        <div class="catalog__empty">
                            <div class="catalog__empty-icon">"🔍"</div>
                            <h3>"No courses found"</h3>
                            <p>"Try adjusting your search terms or category filter"</p>
                            <Button on_click=clear>"Clear Filters"</Button>
                        </div>
                    </Show>
                </div>
            </section>
        </MarketingLayout>
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    view! {
        <Card class="course-card">
            <div class="course-card__media">
                <img src=course.image alt=course.title width="400" height="225" />
                {course.featured.then(|| view! { <Badge class="course-card__featured">"Featured"</Badge> })}
                <Badge tone=course.level.tone() class="course-card__level">{course.level.as_str()}</Badge>
            </div>

            <CardHeader>
                <Badge outline=true>{course.category}</Badge>
                <CardTitle class="course-card__title">{course.title}</CardTitle>
                <p class="course-card__instructor">{format!("by {}", course.instructor)}</p>
            </CardHeader>

            <CardContent class="course-card__body">
                <CardDescription class="course-card__description">{course.description}</CardDescription>
                <div class="course-card__stats">
                    <span>{format!("🕒 {}", course.duration)}</span>
                    <span>{format!("📖 {} lessons", course.lessons)}</span>
                    <span>{format!("👥 {} students", course.students)}</span>
                    <span>{format!("⭐ {}", course.rating)}</span>
                </div>
                <div class="course-card__tags">
                    {course
                        .visible_tags()
                        .iter()
                        .map(|tag| view! { <Badge tone="secondary" class="course-card__tag">{*tag}</Badge> })
                        .collect_view()}
                </div>
            </CardContent>

            <CardFooter class="course-card__footer">
                <div class="course-card__price">
                    <span class="course-card__amount">{format_price(course.price_cents)}</span>
                    {course
                        .original_price_cents
                        .map(|cents| view! { <span class="course-card__original">{format_price(cents)}</span> })}
                </div>
                <div class="course-card__actions">
                    <Button class="course-card__action">"Add to Cart"</Button>
                    <Button variant=ButtonVariant::Outline class="course-card__action">"View Details"</Button>
                </div>
            </CardFooter>
        </Card>
    }
}
