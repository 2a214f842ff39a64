use yew::prelude::*;

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Termos de Uso"}</h1>

                <section>
                    <h2>{"1. O Produto"}</h2>
                    <p>
                        {"O WealthSyncX é um produto digital (Ebook) com um método prático para gerar renda com ferramentas de Inteligência Artificial. O acesso é entregue imediatamente após a confirmação do pagamento, processado integralmente pela plataforma de checkout externa (Hotmart)."}
                    </p>
                </section>

                <section>
                    <h2>{"2. Pagamento e Acesso"}</h2>
                    <ul>
                        <li>{"O pagamento é processado pela plataforma de checkout externa; este site não coleta nem armazena dados de pagamento."}</li>
                        <li>{"O acesso ao material é pessoal e intransferível."}</li>
                        <li>{"O preço exibido é promocional e pode ser alterado sem aviso prévio."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Garantia de 7 Dias"}</h2>
                    <p>
                        {"Você tem 7 dias corridos a partir da compra para solicitar reembolso integral, sem necessidade de justificativa. A solicitação é feita pelo e-mail de suporte ou diretamente pela plataforma de checkout."}
                    </p>
                </section>

                <section>
                    <h2>{"4. Propriedade Intelectual"}</h2>
                    <p>
                        {"Todo o conteúdo do Ebook e deste site é protegido por direitos autorais. É proibida a reprodução, distribuição ou revenda sem autorização expressa."}
                    </p>
                </section>

                <section>
                    <h2>{"5. Isenção de Resultados"}</h2>
                    <p>
                        {"Os resultados apresentados são exemplos e depoimentos individuais. Ganhos dependem da aplicação do método por cada pessoa e não constituem promessa de renda."}
                    </p>
                </section>
            </div>
            <LegalStyles />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Política de Privacidade"}</h1>

                <section>
                    <h2>{"1. Dados Coletados"}</h2>
                    <p>
                        {"Este site é uma página de apresentação e não possui cadastro, login nem formulários. Nenhum dado pessoal é coletado ou armazenado por este site."}
                    </p>
                </section>

                <section>
                    <h2>{"2. Checkout Externo"}</h2>
                    <p>
                        {"A compra é concluída em uma plataforma de checkout externa (Hotmart), que possui política de privacidade própria. Dados de pagamento são tratados exclusivamente por ela."}
                    </p>
                </section>

                <section>
                    <h2>{"3. Conteúdo de Terceiros"}</h2>
                    <p>
                        {"O vídeo de apresentação é incorporado via YouTube no modo de privacidade aprimorada (youtube-nocookie.com), que limita o uso de cookies de rastreamento."}
                    </p>
                </section>

                <section>
                    <h2>{"4. Contato"}</h2>
                    <p>
                        {"Dúvidas sobre esta política podem ser enviadas para suporte@wealthsyncx.com."}
                    </p>
                </section>
            </div>
            <LegalStyles />
        </div>
    }
}

#[function_component(LegalStyles)]
fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
            .legal-content {
                min-height: 100vh;
                background: #121212;
                padding: 8rem 2rem 4rem;
                color: #fff;
                display: flex;
                flex-direction: column;
                align-items: center;
            }

            .legal-content > div {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(11, 183, 218, 0.15);
                border-radius: 16px;
                padding: 3rem;
                max-width: 800px;
                margin: 0 auto;
            }

            .legal-content h1 {
                font-size: 2rem;
                background: linear-gradient(135deg, #0BB7DA, #7C3AED);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
                margin-bottom: 2.5rem;
                text-align: center;
            }

            .legal-content section {
                background: rgba(0, 0, 0, 0.2);
                border-radius: 12px;
                padding: 2rem;
                margin: 1.5rem auto;
            }

            .legal-content h2 {
                color: #0BB7DA;
                font-size: 1.3rem;
                margin-bottom: 1rem;
            }

            .legal-content p,
            .legal-content li {
                color: #999;
                line-height: 1.7;
                margin-bottom: 0.8rem;
            }

            .legal-content ul {
                list-style: none;
                padding-left: 0;
            }

            .legal-content li::before {
                content: '• ';
                color: #0BB7DA;
            }
            "#}
        </style>
    }
}
