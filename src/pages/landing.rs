use gloo_timers::callback::Interval;
use log::info;
use serde::Serialize;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::countdown::{CountdownDisplay, CountdownState};
use crate::components::faq::FaqItem;
use crate::config;
use crate::head;
use crate::Route;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[Faq] = &[
    Faq {
        question: "Preciso ter experiência prévia com Inteligência Artificial ou programação?",
        answer: "Não. O método foi desenhado para o iniciante completo. A IA que usamos é tão intuitiva que a parte técnica é a mais fácil. Você não precisa programar, apenas seguir o Plano de Ação de 7 Dias contido no Ebook. Se você sabe usar o WhatsApp, você já tem a experiência necessária para começar a gerar renda.",
    },
    Faq {
        question: "Quanto tempo por dia preciso dedicar para ter resultados?",
        answer: "O objetivo do método é justamente aposentar o esforço manual. Graças à IA, você pode começar a aplicar o método com apenas 1 a 2 horas por dia nas suas horas vagas. O Ebook foca em te dar a estratégia para trabalhar menos e produzir mais, garantindo que seu tempo seja investido de forma inteligente e escalável.",
    },
    Faq {
        question: "Em quanto tempo consigo ter meu primeiro retorno financeiro?",
        answer: "Muitos dos nossos alunos conseguem fechar o primeiro ciclo de vendas ou conquistar o primeiro cliente em menos de 7 dias após aplicar o Plano de Ação do Ebook. O método é focado em gerar caixa rápido através de serviços e produtos digitais de baixo atrito. O retorno depende da sua aplicação, mas a estrutura está pronta para resultados imediatos.",
    },
    Faq {
        question: "O preço não está muito baixo? Será que o conteúdo é de qualidade?",
        answer: "O preço atual é uma oferta promocional de lançamento por tempo extremamente limitado. Nosso foco é que o máximo de pessoas tenha acesso a essa tecnologia agora, antes que o mercado se sature. O valor do conhecimento contido no Ebook, que pode te ensinar a gerar milhares de reais em renda extra, é inestimável. Você está fazendo um investimento de baixíssimo risco para um potencial de retorno altíssimo.",
    },
    Faq {
        question: "E se eu comprar e o método não funcionar para mim?",
        answer: "Risco Zero para Você. Temos tanta confiança no nosso método que oferecemos uma Garantia Incondicional de 7 Dias. Você tem uma semana inteira para acessar o Ebook, aplicar o Plano de Ação de 7 Dias e comprovar o potencial do método. Se você não gostar, achar que não é para você, ou simplesmente mudar de ideia, basta nos enviar um e-mail dentro deste prazo. Devolveremos 100% do seu dinheiro, sem perguntas e sem burocracia. O risco é todo nosso.",
    },
    Faq {
        question: "Preciso de um computador de última geração ou ferramentas pagas?",
        answer: "Não. Você pode começar a aplicar o método com o celular ou computador que você já tem. O Ebook foca em ferramentas de IA que possuem versões gratuitas e funcionais (como o ChatGPT e o Canva). Você só deve considerar investir em ferramentas pagas depois que já estiver gerando renda com o método. Comece com o que você tem e escale seus ganhos."
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Comecei do zero e em 60 dias já estava ganhando. Agora trabalho 2 horas por dia.",
        author: "Ana M.",
        role: "Professora",
    },
    Testimonial {
        quote: "Não sou tech-savvy, mas o ebook explicou de forma tão simples que consegui implementar em uma semana.",
        author: "Carlos R.",
        role: "Ex-Vendedor",
    },
    Testimonial {
        quote: "O melhor foi descobrir que não preciso aparecer. Ganho dinheiro nos bastidores.",
        author: "Aisha S.",
        role: "Dona de Casa",
    },
    Testimonial {
        quote: "Esperava gastar muito, mas comecei com ferramentas gratuitas. Só depois investi.",
        author: "João P.",
        role: "Iniciante",
    },
];

struct UnlockItem {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const UNLOCK_ITEMS: &[UnlockItem] = &[
    UnlockItem {
        number: "1",
        title: "A Chave da Escala",
        description: "O segredo para parar de trocar tempo por dinheiro e construir um sistema que trabalha para você 24 horas por dia.",
    },
    UnlockItem {
        number: "2",
        title: "IA Descomplicada",
        description: "Entenda o que a Inteligência Artificial realmente faz (e o que não faz) em 15 minutos, sem jargões técnicos ou complicação.",
    },
    UnlockItem {
        number: "3",
        title: "O Caminho dos Iniciantes",
        description: "Veja 3 estudos de caso de pessoas comuns que usaram o método para gerar renda extra, e descubra o nicho de maior potencial para você.",
    },
    UnlockItem {
        number: "4",
        title: "O Plano de Ataque",
        description: "A estratégia exata para escolher entre Renda Ativa (caixa rápido) e Renda Escalável (liberdade), e como a IA acelera as duas.",
    },
    UnlockItem {
        number: "5",
        title: "Seu Kit de Sobrevivência",
        description: "As 3 ferramentas de IA gratuitas que você precisa para começar hoje, sem gastar um centavo e sem sobrecarga de informação.",
    },
    UnlockItem {
        number: "6",
        title: "O Plano de Ação de 7 Dias",
        description: "O passo a passo prático, dia a dia, para ir do zero à sua primeira venda ou cliente em apenas uma semana.",
    },
    UnlockItem {
        number: "7",
        title: "A Janela de Ouro",
        description: "Por que quem age agora sai na frente e estabelece autoridade, e como você pode aproveitar o \"efeito 2008\" da internet.",
    },
    UnlockItem {
        number: "8",
        title: "Compra de Risco Zero",
        description: "Como você pode testar o método por 7 dias completos e ter 100% do seu dinheiro de volta se não gostar (o risco é todo nosso).",
    },
];

const SOLUTION_CHECKLIST: &[&str] = &[
    "IA não é ficção científica — é acessível HOJE",
    "Ferramentas gratuitas para começar (ChatGPT, Canva, Make)",
    "Qualquer pessoa pode usar — sem conhecimento técnico",
    "Resultados em 30-60 dias com método prático",
];

struct OpportunityCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const OPPORTUNITY_CARDS: &[OpportunityCard] = &[
    OpportunityCard {
        icon: "📈",
        title: "Mais Oportunidades",
        description: "Que competidores qualificados",
    },
    OpportunityCard {
        icon: "🤖",
        title: "Diferencial Real",
        description: "Dominar IA é um superpoder",
    },
    OpportunityCard {
        icon: "👥",
        title: "Começar HOJE",
        description: "6 meses à frente da concorrência",
    },
];

struct StatCard {
    value: &'static str,
    caption: &'static str,
}

const VSL_STATS: &[StatCard] = &[
    StatCard {
        value: "3",
        caption: "Métodos práticos",
    },
    StatCard {
        value: "30–60",
        caption: "Dias para os primeiros resultados",
    },
    StatCard {
        value: "R$0",
        caption: "Investimento inicial",
    },
];

// schema.org FAQPage shape, built from the same table the visible list
// renders from.
#[derive(Serialize)]
struct FaqPageSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<QuestionSchema>,
}

#[derive(Serialize)]
struct QuestionSchema {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: AnswerSchema,
}

#[derive(Serialize)]
struct AnswerSchema {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    text: &'static str,
}

fn faq_json_ld() -> String {
    let schema = FaqPageSchema {
        context: "https://schema.org",
        schema_type: "FAQPage",
        main_entity: FAQS
            .iter()
            .map(|faq| QuestionSchema {
                schema_type: "Question",
                name: faq.question,
                accepted_answer: AnswerSchema {
                    schema_type: "Answer",
                    text: faq.answer,
                },
            })
            .collect(),
    };
    serde_json::to_string(&schema).unwrap_or_default()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let cta_seconds_left = use_state(|| config::CTA_COUNTDOWN_START);

    // Canonical tag and preload hints once on mount.
    {
        use_effect_with_deps(
            move |_| {
                head::upsert_canonical_link();
                head::ensure_image_preloads(config::IMAGE_PRELOADS);
                || ()
            },
            (),
        );
    }

    // Offer countdown: one tick per second, dropped with the page.
    {
        let cta_seconds_left = cta_seconds_left.clone();
        use_effect_with_deps(
            move |_| {
                let mut state = CountdownState::new(config::CTA_COUNTDOWN_START);
                let interval = Interval::new(1_000, move || {
                    cta_seconds_left.set(state.tick());
                });
                info!("Offer countdown started");
                move || drop(interval)
            },
            (),
        );
    }

    let scroll_to_vsl = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        head::scroll_to_anchor("vsl");
    });

    let scroll_to_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        head::scroll_to_anchor("cta");
    });

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-grid">
                    <div class="hero-text">
                        <div class="hero-badge">
                            {"⚡ ⏰ Comece HOJE, Ganhe AMANHÃ"}
                        </div>
                        <h1>
                            <span class="headline-primary">{"Aposente o Esforço Manual:"}</span>
                            <span class="headline-secondary">
                                {"Transforme suas horas vagas em uma "}
                                <span class="accent">{"Renda Escalável com IA"}</span>
                            </span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Pare de vender suas horas por migalhas. Descubra o método de \"Multiplicação Digital\" que permite a qualquer iniciante criar ativos que trabalham 24h por dia, sem precisar de experiência técnica ou investir em ferramentas pagas."}
                        </p>
                        <div class="hero-cta-group">
                            <div class="hero-cta-column">
                                <a
                                    class="cta-button primary"
                                    href={config::CHECKOUT_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"ACESSAR O PRODUTO →"}
                                </a>
                                <span class="cta-reassurance">
                                    {"✓ Garantia de 7 Dias • Acesso Imediato • Pagamento Seguro"}
                                </span>
                            </div>
                            <button class="cta-button ghost" onclick={scroll_to_vsl}>
                                {"Mais detalhes"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-image">
                        <picture>
                            <source srcset="/images/hero-ai-tech.webp" type="image/webp" />
                            <img
                                src="/images/hero-ai-tech.jpg"
                                alt="Pessoa usando tecnologia de inteligência artificial"
                                width="1600"
                                height="1000"
                                loading="eager"
                                decoding="async"
                                fetchpriority="high"
                            />
                        </picture>
                    </div>
                </div>
            </section>

            <section id="vsl" class="vsl-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Veja o passo a passo"}</h2>
                        <p>{"6 minutos para entender o método e ver se faz sentido para você"}</p>
                    </div>
                    <div class="video-frame">
                        <iframe
                            src={config::VSL_EMBED_URL}
                            title="VSL - WealthSyncX"
                            loading="eager"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            referrerpolicy="strict-origin-when-cross-origin"
                            allowfullscreen=true
                        />
                    </div>
                    <div class="stats-grid">
                        { for VSL_STATS.iter().map(|stat| html! {
                            <div class="stat-card">
                                <div class="stat-value">{stat.value}</div>
                                <p>{stat.caption}</p>
                            </div>
                        }) }
                    </div>
                    <div class="section-cta">
                        <button class="cta-button ghost" onclick={scroll_to_cta}>
                            {"Quero começar agora"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="problem-section">
                <div class="section-inner">
                    <h2>{"O Sistema Foi Desenhado Para Te Manter Estagnado. É Hora de Quebrar as Algemas."}</h2>
                    <p class="section-lead">
                        {"O mundo mudou, mas você ainda está jogando com as regras de 1990. Trocar tempo por dinheiro é a forma mais lenta e dolorosa de buscar liberdade. Se você não tem um sistema que trabalha enquanto você dorme, você trabalhará até o dia em que não puder mais."}
                    </p>
                    <div class="problem-grid">
                        <div class="scenario-cards">
                            <div class="scenario-card">
                                <p class="scenario-tag">{"Cenário A: A Prisão do Salário Fixo"}</p>
                                <p>
                                    {"Você acorda, entrega suas melhores horas para o sonho de outra pessoa e recebe apenas o suficiente para sobreviver e repetir o ciclo amanhã. Sua energia acaba, mas as contas não. Você quer uma renda extra, mas o cansaço é seu maior inimigo."}
                                </p>
                            </div>
                            <div class="scenario-card">
                                <p class="scenario-tag">{"Cenário B: A Paralisia do Iniciante"}</p>
                                <p>
                                    {"Você vê todos ganhando dinheiro na internet, tenta começar, mas se afoga em ferramentas complexas e cursos que não chegam a lugar nenhum. Você sente que chegou tarde demais para a festa."}
                                </p>
                            </div>
                        </div>
                        <div class="section-image">
                            <picture>
                                <source srcset="/images/money-growth.webp" type="image/webp" />
                                <img
                                    src="/images/money-growth.jpg"
                                    alt="Crescimento de Renda"
                                    width="1200"
                                    height="900"
                                    loading="eager"
                                    decoding="async"
                                    fetchpriority="high"
                                />
                            </picture>
                        </div>
                    </div>
                    <div class="highlight-card">
                        <p>
                            {"A Inteligência Artificial não é sobre tecnologia. É sobre "}
                            <span class="accent strong">{"RECUPERAR O SEU TEMPO"}</span>
                            {". Enquanto a maioria teme ser substituída pela IA, uma elite silenciosa está usando essa mesma tecnologia para “clonar” sua capacidade produtiva e criar fontes de lucro que não exigem sua presença física."}
                        </p>
                    </div>
                    <p class="section-closing">
                        {"Você não precisa trabalhar mais duro. Você precisa de uma alavanca. E eu acabo de te entregar o mapa dessa alavanca."}
                    </p>
                </div>
            </section>

            <section class="solution-section">
                <div class="section-inner">
                    <div class="solution-grid">
                        <div class="section-image">
                            <picture>
                                <source srcset="/images/productivity-ai.webp" type="image/webp" />
                                <img
                                    src="/images/productivity-ai.jpg"
                                    alt="Produtividade com IA"
                                    width="1200"
                                    height="900"
                                    loading="eager"
                                    decoding="async"
                                    fetchpriority="high"
                                />
                            </picture>
                        </div>
                        <div class="solution-text">
                            <h2>{"Existe Uma Forma Melhor: Trabalhe Menos, Ganhe Mais"}</h2>
                            <p>
                                {"Imagine um assistente incansável que trabalha 24 horas por dia, nunca tira férias, não comete erros e custa praticamente nada. Isso é a inteligência artificial moderna."}
                            </p>
                            <ul class="check-list">
                                { for SOLUTION_CHECKLIST.iter().map(|item| html! {
                                    <li><span class="check-mark">{"✓"}</span>{item}</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section class="opportunity-section">
                <div class="section-inner narrow">
                    <h2>{"A Janela de Oportunidade"}</h2>
                    <p class="section-lead">
                        {"O mercado de IA hoje é uma terra de ninguém. É a corrida do ouro, e você acaba de encontrar o mapa. Em dois anos, todos saberão usar essas ferramentas. Hoje? Hoje você é o mestre em um mundo de aprendizes. Quem chega primeiro bebe água limpa."}
                    </p>
                    <div class="quote-card">
                        <p class="quote-text">
                            {"\"Em 2008, saber fazer um site era um superpoder. Em 2024, é básico. Com IA, estamos em 2008 ainda.\""}
                        </p>
                        <p>{"Quem aprende agora sai na frente e estabelece autoridade antes de o mercado ficar saturado."}</p>
                    </div>
                    <div class="opportunity-grid">
                        { for OPPORTUNITY_CARDS.iter().map(|card| html! {
                            <div class="opportunity-card">
                                <span class="opportunity-icon">{card.icon}</span>
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="unlock-section">
                <div class="section-inner">
                    <h2 class="centered">{"O que você vai desbloquear com este Mapa✨"}</h2>
                    <div class="unlock-grid">
                        { for UNLOCK_ITEMS.iter().map(|item| html! {
                            <div class="unlock-card">
                                <div class="unlock-number">{item.number}</div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="testimonials-section">
                <div class="section-inner">
                    <h2 class="centered">{"Pessoas Reais, Resultados Reais"}</h2>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <div class="star-row">
                                    { for (0..5).map(|_| html! { <span class="star">{"★"}</span> }) }
                                </div>
                                <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                                <p class="testimonial-author">{t.author}</p>
                                <p class="testimonial-role">{t.role}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="faq-section">
                <div class="section-inner narrow">
                    <script type="application/ld+json">
                        { faq_json_ld() }
                    </script>
                    <h2 class="centered">{"Suas Dúvidas Respondidas"}</h2>
                    <div class="faq-list">
                        { for FAQS.iter().map(|faq| html! {
                            <FaqItem question={faq.question}>
                                <p>{faq.answer}</p>
                            </FaqItem>
                        }) }
                    </div>
                </div>
            </section>

            <section id="cta" class="cta-section">
                <div class="section-inner">
                    <h2 class="centered">{"O Código Foi Quebrado. Você Vai Ficar de Fora?"}</h2>
                    <p class="section-lead centered">{"Pense por um instante:"}</p>
                    <div class="compare-grid">
                        <div class="scenario-card">
                            <p class="scenario-tag">{"DE UM LADO"}</p>
                            <p>
                                {"A frustração de trocar horas por um salário fixo, a sensação de estar sempre correndo atrás de um sonho e, no final de tudo, as contas não batem."}
                            </p>
                        </div>
                        <div class="scenario-card">
                            <p class="scenario-tag">{"DO OUTRO LADO"}</p>
                            <p>
                                {"A tranquilidade de ter um sistema de renda que trabalha por você, a liberdade de usar suas horas vagas para o que realmente importa e a certeza de estar à frente da maior revolução tecnológica da história."}
                            </p>
                        </div>
                    </div>
                    <p class="price-line">
                        {"Você leu o mapa. Você viu o caminho. Você sabe que o preço de "}
                        <strong>{"USD$ 9,47"}</strong>
                        {" é um presente que não durará."}
                    </p>
                    <p class="urgency-line">
                        {"A "}<span class="accent">{"ÚNICA COISA"}</span>
                        {" ENTRE VOCÊ E A SUA PRIMEIRA RENDA COM IA É ESTE CLIQUE."}
                    </p>
                    <div class="countdown-wrap">
                        <span class="countdown-caption">{"Oferta encerra em"}</span>
                        <CountdownDisplay total_seconds={*cta_seconds_left as f64} />
                    </div>
                    <div class="section-cta">
                        <a
                            class="cta-button primary large"
                            href={config::CHECKOUT_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"→ A HORA DE AGIR É AGORA"}
                        </a>
                    </div>
                    <p class="cta-reassurance centered">
                        {"• Garantia Blindada de 7 Dias • Acesso Imediato • Pagamento 100% Seguro"}
                    </p>
                </div>
            </section>

            <footer class="site-footer">
                <div class="section-inner">
                    <p>{"© 2026 WealthSyncX. Todos os direitos reservados."}</p>
                    <div class="footer-links">
                        <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                        <a href="mailto:suporte@wealthsyncx.com">{"Contato"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #121212;
                    color: #fff;
                }

                .section-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .section-inner.narrow {
                    max-width: 800px;
                }

                .landing-page section {
                    padding: 5rem 0;
                }

                .landing-page h2 {
                    font-size: 2.4rem;
                    margin-bottom: 1.5rem;
                    line-height: 1.2;
                }

                .landing-page h2.centered,
                .centered {
                    text-align: center;
                }

                .section-lead {
                    font-size: 1.15rem;
                    color: #999;
                    line-height: 1.8;
                    margin-bottom: 2.5rem;
                }

                .accent {
                    color: #0BB7DA;
                }

                .accent.strong {
                    font-weight: 800;
                    letter-spacing: 0.04em;
                }

                /* Hero */

                .hero {
                    padding-top: 10rem;
                    background:
                        radial-gradient(ellipse at top, rgba(11, 183, 218, 0.12), transparent 60%),
                        #121212;
                    overflow: hidden;
                }

                .hero-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #f0d27a;
                    background: rgba(212, 175, 55, 0.12);
                    border: 1px solid rgba(212, 175, 55, 0.35);
                    margin-bottom: 2rem;
                }

                .hero h1 {
                    font-size: 2.4rem;
                    font-weight: 800;
                    line-height: 1.2;
                    margin-bottom: 1.8rem;
                }

                .headline-primary {
                    display: block;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .headline-secondary {
                    display: block;
                    margin-top: 1rem;
                    font-size: 0.8em;
                }

                .hero-subtitle {
                    font-size: 1.1rem;
                    color: #999;
                    line-height: 1.85;
                    max-width: 32rem;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.2rem;
                    align-items: flex-start;
                }

                .hero-cta-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2.5rem;
                    border-radius: 10px;
                    font-size: 1.05rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    border: none;
                }

                .cta-button.primary {
                    color: #fff;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    box-shadow: 0 0 24px rgba(11, 183, 218, 0.35);
                }

                .cta-button.primary:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 36px rgba(124, 58, 237, 0.45);
                }

                .cta-button.primary.large {
                    padding: 1.2rem 3rem;
                    font-size: 1.15rem;
                    border-radius: 14px;
                }

                .cta-button.ghost {
                    color: #fff;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                }

                .cta-button.ghost:hover {
                    border-color: #0BB7DA;
                    color: #0BB7DA;
                }

                .cta-reassurance {
                    font-size: 0.75rem;
                    color: #999;
                }

                .hero-image img,
                .section-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 16px;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.5);
                }

                /* VSL */

                .vsl-section {
                    background: #171720;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-header p {
                    font-size: 1.2rem;
                    color: #999;
                }

                .video-frame {
                    position: relative;
                    max-width: 800px;
                    margin: 0 auto;
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(11, 183, 218, 0.2);
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.5);
                }

                .video-frame iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border: none;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                    text-align: center;
                }

                .stat-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(11, 183, 218, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .stat-card:hover {
                    transform: scale(1.05);
                }

                .stat-value {
                    font-size: 2.4rem;
                    font-weight: 800;
                    color: #0BB7DA;
                    margin-bottom: 0.5rem;
                }

                .stat-card p {
                    color: #999;
                    font-weight: 600;
                }

                .section-cta {
                    text-align: center;
                    margin-top: 3rem;
                }

                /* Problema / solução */

                .problem-grid,
                .solution-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .scenario-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .scenario-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(11, 183, 218, 0.2);
                    border-radius: 14px;
                    padding: 1.5rem;
                }

                .scenario-tag {
                    font-size: 0.9rem;
                    font-weight: 700;
                    color: #0BB7DA;
                    margin-bottom: 0.6rem;
                }

                .scenario-card p:last-child {
                    color: #999;
                    line-height: 1.7;
                }

                .highlight-card {
                    background: rgba(30, 30, 30, 0.7);
                    border-left: 4px solid #0BB7DA;
                    border-radius: 14px;
                    padding: 2rem;
                    margin-top: 2.5rem;
                }

                .highlight-card p {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.8;
                }

                .section-closing {
                    text-align: center;
                    color: #999;
                    font-size: 1.1rem;
                    margin-top: 1.5rem;
                }

                .solution-section {
                    background: #171720;
                }

                .solution-text p {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 2rem;
                }

                .check-list {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .check-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.8rem;
                    color: #999;
                    font-size: 1.05rem;
                }

                .check-mark {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    color: #fff;
                    font-size: 0.85rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    margin-top: 0.15rem;
                }

                /* Oportunidade */

                .opportunity-section {
                    text-align: center;
                }

                .quote-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(11, 183, 218, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                    margin-bottom: 3rem;
                }

                .quote-text {
                    font-size: 1.4rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .quote-card p:last-child {
                    color: #999;
                }

                .opportunity-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .opportunity-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(11, 183, 218, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                }

                .opportunity-icon {
                    font-size: 2rem;
                    display: block;
                    margin-bottom: 1rem;
                }

                .opportunity-card h3 {
                    margin-bottom: 0.5rem;
                }

                .opportunity-card p {
                    color: #999;
                }

                /* Desbloqueios */

                .unlock-section {
                    background: #171720;
                }

                .unlock-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .unlock-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    background: rgba(30, 30, 30, 0.7);
                    border-left: 4px solid #0BB7DA;
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .unlock-card:hover {
                    transform: scale(1.01);
                }

                .unlock-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .unlock-card h3 {
                    margin-bottom: 0.5rem;
                }

                .unlock-card p {
                    color: #999;
                    line-height: 1.6;
                }

                /* Depoimentos */

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .testimonial-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(11, 183, 218, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                }

                .star-row {
                    margin-bottom: 1rem;
                }

                .star {
                    color: #0BB7DA;
                }

                .testimonial-quote {
                    color: #999;
                    font-style: italic;
                    font-size: 1.05rem;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .testimonial-author {
                    font-weight: 700;
                }

                .testimonial-role {
                    color: #999;
                    font-size: 0.9rem;
                }

                /* FAQ */

                .faq-section {
                    background: #171720;
                }

                .faq-list {
                    margin-top: 3rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: rgba(30, 30, 30, 0.85);
                    border: 1px solid rgba(11, 183, 218, 0.15);
                    border-radius: 12px;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(11, 183, 218, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    color: #0BB7DA;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #0BB7DA;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 1000px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.7;
                }

                /* CTA final */

                .cta-section {
                    background:
                        radial-gradient(ellipse at bottom, rgba(124, 58, 237, 0.12), transparent 60%),
                        #121212;
                    text-align: center;
                }

                .compare-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    text-align: left;
                    margin-bottom: 2.5rem;
                }

                .price-line {
                    font-size: 1.15rem;
                    color: #999;
                    margin-bottom: 1rem;
                }

                .urgency-line {
                    font-size: 1.4rem;
                    font-weight: 800;
                    line-height: 1.4;
                    margin-bottom: 2.5rem;
                }

                .countdown-wrap {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.8rem;
                    margin-bottom: 2.5rem;
                }

                .countdown-caption {
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #999;
                }

                .countdown {
                    display: inline-flex;
                    align-items: stretch;
                    justify-content: center;
                    gap: 0.8rem;
                }

                .countdown-block {
                    width: 88px;
                    padding: 0.8rem 1rem;
                    border-radius: 16px;
                    text-align: center;
                    background: rgba(30, 30, 30, 0.85);
                    border: 1px solid rgba(11, 183, 218, 0.3);
                    box-shadow: 0 0 18px rgba(11, 183, 218, 0.15);
                }

                .countdown-value {
                    font-size: 1.9rem;
                    font-weight: 800;
                    font-variant-numeric: tabular-nums;
                    color: #0BB7DA;
                    text-shadow: 0 0 12px rgba(11, 183, 218, 0.5);
                }

                .countdown-label {
                    margin-top: 0.5rem;
                    font-size: 0.65rem;
                    font-weight: 600;
                    letter-spacing: 0.28em;
                    color: #999;
                }

                .countdown-separator {
                    align-self: center;
                    font-size: 1.7rem;
                    color: #0BB7DA;
                    user-select: none;
                }

                /* Footer */

                .site-footer {
                    padding: 3rem 0;
                    text-align: center;
                    color: #999;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-links {
                    margin-top: 1rem;
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    font-size: 0.9rem;
                }

                .footer-links a {
                    color: #999;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                @media (max-width: 768px) {
                    .landing-page section {
                        padding: 3.5rem 0;
                    }

                    .landing-page h2 {
                        font-size: 1.8rem;
                    }

                    .hero {
                        padding-top: 7rem;
                    }

                    .hero-grid,
                    .problem-grid,
                    .solution-grid,
                    .unlock-grid,
                    .testimonials-grid,
                    .compare-grid {
                        grid-template-columns: 1fr;
                    }

                    .stats-grid,
                    .opportunity-grid {
                        grid-template-columns: 1fr;
                    }

                    .solution-grid .section-image {
                        order: 1;
                    }

                    .solution-text {
                        order: 0;
                    }

                    .countdown-block {
                        width: 74px;
                        padding: 0.6rem 0.6rem;
                    }

                    .countdown-value {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_ld_mirrors_the_visible_faq_list() {
        let raw = faq_json_ld();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed["@context"], "https://schema.org");
        assert_eq!(parsed["@type"], "FAQPage");

        let entities = parsed["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), FAQS.len());

        for (entity, faq) in entities.iter().zip(FAQS) {
            assert_eq!(entity["@type"], "Question");
            assert_eq!(entity["name"], faq.question);
            assert_eq!(entity["acceptedAnswer"]["@type"], "Answer");
            assert_eq!(entity["acceptedAnswer"]["text"], faq.answer);
        }
    }
}
